//! The entry point: a route table bound to a transport.

use std::sync::Arc;

use crate::config::{ApiKind, Config};
use crate::endpoint::Endpoint;
use crate::error::TetherError;
use crate::http::HttpTransport;
use crate::routes::{self, RouteTable};
use crate::transport::Transport;

/// Collection requested by [`ConnectWiseClient::test_connection`] on Manage.
pub const MANAGE_CHECK_PATH: &str = "system/info/personas";

/// Collection requested by [`ConnectWiseClient::test_connection`] on Automate.
pub const AUTOMATE_CHECK_PATH: &str = "Contacts";

/// A ConnectWise Manage or Automate client.
///
/// Cloning is cheap; clones share the route table and the transport.
///
/// ```ignore
/// let client = ConnectWiseClient::connect(&Config::from_env()?).await?;
/// let states = client.endpoint("company/states")?;
/// let all: Vec<serde_json::Value> = states.paginated(1, 100, None).await?.collect_all().await?;
/// ```
#[derive(Clone)]
pub struct ConnectWiseClient {
    kind: ApiKind,
    routes: Arc<RouteTable>,
    transport: Arc<dyn Transport>,
}

impl ConnectWiseClient {
    /// Creates a client over HTTP. Automate username/password credentials
    /// are exchanged for a token here.
    pub async fn connect(config: &Config) -> Result<Self, TetherError> {
        let transport = HttpTransport::connect(config).await?;
        Ok(Self::from_parts(config.kind(), Arc::new(transport)))
    }

    /// Creates a client over HTTP without any network round trip.
    ///
    /// # Errors
    ///
    /// Fails for Automate username/password credentials; use
    /// [`connect`](Self::connect) for those.
    pub fn new(config: &Config) -> Result<Self, TetherError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::from_parts(config.kind(), Arc::new(transport)))
    }

    /// Creates a client over any transport, using the built-in table for `kind`.
    pub fn from_parts(kind: ApiKind, transport: Arc<dyn Transport>) -> Self {
        let routes = match kind {
            ApiKind::Manage => routes::manage(),
            ApiKind::Automate => routes::automate(),
        };
        Self {
            kind,
            routes,
            transport,
        }
    }

    /// Which product this client talks to.
    pub fn kind(&self) -> ApiKind {
        self.kind
    }

    /// The route table endpoints resolve against.
    pub fn routes(&self) -> &Arc<RouteTable> {
        &self.routes
    }

    /// The API root. Its path is empty.
    pub fn root(&self) -> Endpoint {
        Endpoint::root(Arc::clone(&self.routes), Arc::clone(&self.transport))
    }

    /// Resolves a path such as `service/boards/3/teams` from the root.
    pub fn endpoint(&self, path: &str) -> Result<Endpoint, TetherError> {
        self.root().at(path)
    }

    /// Requests one item of a small collection to check credentials and
    /// reachability.
    pub async fn test_connection(&self) -> Result<(), TetherError> {
        let path = match self.kind {
            ApiKind::Manage => MANAGE_CHECK_PATH,
            ApiKind::Automate => AUTOMATE_CHECK_PATH,
        };
        tracing::debug!(path, "Testing connection to ConnectWise");

        let result = self
            .endpoint(path)?
            .paginated::<serde_json::Value>(1, 1, None)
            .await;

        match result {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(TetherError::Authentication) => Err(TetherError::connection_test(
                "authentication failed - verify the client id and credentials",
            )),
            Err(TetherError::Timeout { duration, .. }) => {
                Err(TetherError::connection_test(format!(
                    "timed out after {:?} - verify CW_BASE_URL is correct and the server is reachable",
                    duration
                )))
            }
            Err(TetherError::NotFound { path }) => Err(TetherError::connection_test(format!(
                "/{} was not found - verify CW_BASE_URL and CW_CODEBASE",
                path
            ))),
            Err(e) => Err(TetherError::connection_test(e.to_string())),
        }
    }
}

impl std::fmt::Debug for ConnectWiseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectWiseClient")
            .field("kind", &self.kind)
            .field("routes", &self.routes.len())
            .finish()
    }
}
