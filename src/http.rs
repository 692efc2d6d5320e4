//! reqwest-backed transport for the ConnectWise REST APIs.
//!
//! This module provides [`HttpTransport`], which adds authentication, the
//! client id header and the API root to every request issued by an endpoint.
//!
//! # Retry Logic
//!
//! The transport retries transient failures, up to `Config::max_retries`:
//! - HTTP 429 (rate limit): `Retry-After` if given, else exponential backoff from 100ms
//! - HTTP 502/503/504: fixed 500ms delay
//! - Timeouts and connection failures: exponential backoff
//!
//! Client errors (4xx except 429) are never retried. Endpoints and pagination
//! never retry on their own; whatever error leaves this module is final.
//!
//! # Security
//!
//! Credentials are never logged. Error bodies are sanitized and truncated
//! before they are placed in an error.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;

use crate::config::{ApiKind, Config, Credentials};
use crate::error::TetherError;
use crate::models::TokenResult;
use crate::transport::{query_pairs, QueryParams, RawResponse, Transport};

/// API path appended to Manage site URLs, after the codebase.
const MANAGE_API_PATH: &str = "apis/3.0";

/// API path appended to Automate site URLs.
const AUTOMATE_API_PATH: &str = "cwa/api/v1";

/// Automate endpoint that exchanges user credentials for a bearer token.
const AUTOMATE_TOKEN_PATH: &str = "apitoken";

/// Initial delay for exponential backoff (milliseconds).
const INITIAL_BACKOFF_MS: u64 = 100;

/// Delay before retrying after a gateway error (milliseconds).
const SERVER_ERROR_DELAY_MS: u64 = 500;

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

#[derive(Clone)]
enum Auth {
    /// Manage: `companyId+publicKey` / `privateKey`.
    Basic { username: String, password: String },
    /// Automate bearer token.
    Bearer(String),
    /// Only used while exchanging Automate credentials for a token.
    Anonymous,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TokenRequest<'a> {
    user_name: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    two_factor_passcode: Option<&'a str>,
}

/// HTTP transport for ConnectWise Manage and Automate.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let transport = HttpTransport::connect(&config).await?;
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// API root, e.g. `https://na.myconnectwise.net/v4_6_release/apis/3.0`.
    base_url: String,

    /// Developer client id sent as the `clientId` header.
    client_id: String,

    /// SECURITY: never log this value.
    auth: Auth,

    timeout: Duration,

    max_retries: u32,

    /// Values scrubbed from every error body.
    secrets: Vec<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SECURITY: credentials and secrets are deliberately omitted.
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Creates a transport for Manage or token-based Automate configurations.
    ///
    /// # Errors
    ///
    /// Returns `TetherError::Config` for Automate username/password
    /// credentials, which need the async [`connect`](Self::connect), and
    /// `TetherError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, TetherError> {
        let auth = match config.credentials() {
            Credentials::Manage {
                company_id,
                public_key,
                private_key,
                ..
            } => Auth::Basic {
                username: format!("{}+{}", company_id, public_key),
                password: private_key.clone(),
            },
            Credentials::AutomateToken { token } => Auth::Bearer(token.clone()),
            Credentials::AutomatePassword { .. } => {
                return Err(TetherError::invalid_config(
                    "Automate username/password credentials require HttpTransport::connect",
                ))
            }
        };
        Self::build(config, auth)
    }

    /// Creates a transport for any configuration, exchanging Automate
    /// username/password credentials for a bearer token first.
    pub async fn connect(config: &Config) -> Result<Self, TetherError> {
        let Credentials::AutomatePassword {
            username,
            password,
            two_factor,
        } = config.credentials()
        else {
            return Self::new(config);
        };

        let anonymous = Self::build(config, Auth::Anonymous)?;
        let body = serde_json::to_value(TokenRequest {
            user_name: username,
            password,
            two_factor_passcode: two_factor.as_deref(),
        })?;

        tracing::debug!("Requesting Automate API token");
        let response = anonymous
            .issue(Method::POST, AUTOMATE_TOKEN_PATH, Some(&body), &QueryParams::new())
            .await?;
        let token: TokenResult = serde_json::from_str(&response.body)?;
        let access_token = token.access_token.ok_or_else(|| {
            TetherError::invalid_config("Automate token response did not contain an access token")
        })?;
        tracing::info!(expires = ?token.expiration_date, "Automate API token issued");

        let mut transport = anonymous;
        transport.secrets.push(access_token.clone());
        transport.auth = Auth::Bearer(access_token);
        Ok(transport)
    }

    fn build(config: &Config, auth: Auth) -> Result<Self, TetherError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TetherError::HttpClient)?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(config),
            client_id: config.client_id.clone(),
            auth,
            timeout: config.timeout,
            max_retries: config.max_retries,
            secrets: config
                .credentials()
                .secrets()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    /// Appends the API root for the configured product unless the site URL
    /// already points at it.
    fn normalize_base_url(config: &Config) -> String {
        let url = config.base_url.trim_end_matches('/');
        match config.credentials() {
            Credentials::Manage { codebase, .. } => {
                if url.ends_with(MANAGE_API_PATH) {
                    url.to_string()
                } else {
                    format!("{}/{}/{}", url, codebase.trim_matches('/'), MANAGE_API_PATH)
                }
            }
            _ => {
                if url.ends_with(AUTOMATE_API_PATH) {
                    url.to_string()
                } else {
                    format!("{}/{}", url, AUTOMATE_API_PATH)
                }
            }
        }
    }

    /// Returns the API root every request path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns which product this transport is authenticated against.
    pub fn kind(&self) -> ApiKind {
        match self.auth {
            Auth::Basic { .. } => ApiKind::Manage,
            _ => ApiKind::Automate,
        }
    }

    fn secret_refs(&self) -> Vec<&str> {
        self.secrets.iter().map(String::as_str).collect()
    }

    /// Executes an operation with retry logic for transient failures.
    async fn with_retry<T, F, Fut>(&self, operation: &str, f: F) -> Result<T, TetherError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, TetherError>>,
    {
        let mut delay = Duration::from_millis(INITIAL_BACKOFF_MS);
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempts <= self.max_retries => {
                    let actual_delay = if e.is_rate_limit() {
                        e.retry_after().unwrap_or(delay)
                    } else if matches!(e, TetherError::ServiceUnavailable { .. }) {
                        Duration::from_millis(SERVER_ERROR_DELAY_MS)
                    } else {
                        delay
                    };

                    tracing::debug!(
                        operation = operation,
                        attempt = attempts,
                        max_retries = self.max_retries,
                        delay_ms = actual_delay.as_millis() as u64,
                        error = %e.sanitized_display(&self.secret_refs()),
                        "Retrying after transient error"
                    );

                    tokio::time::sleep(actual_delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    if attempts > 1 {
                        tracing::debug!(
                            operation = operation,
                            attempts = attempts,
                            "All retry attempts exhausted"
                        );
                    }
                    return Err(e);
                }
            }
        }
    }

    /// Sends one request without retries.
    async fn issue_once(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        query: &QueryParams,
    ) -> Result<RawResponse, TetherError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        tracing::debug!(method = %method, path = %path, "Making ConnectWise API request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header("clientId", &self.client_id)
            .header("Accept", "application/json");

        req = match &self.auth {
            Auth::Basic { username, password } => req.basic_auth(username, Some(password)),
            Auth::Bearer(token) => req.bearer_auth(token),
            Auth::Anonymous => req,
        };

        if !query.is_empty() {
            req = req.query(&query_pairs(query));
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return TetherError::timeout(self.timeout, format!("{} {}", method, path));
            }
            TetherError::Http(e)
        })?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, path, response).await);
        }

        let headers = response.headers().clone();
        let body = response.text().await.map_err(TetherError::Http)?;

        tracing::trace!(status = %status, bytes = body.len(), "ConnectWise API response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Handles HTTP-level errors and converts to TetherError.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        path: &str,
        response: reqwest::Response,
    ) -> TetherError {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.text().await.unwrap_or_default();
        let body = TetherError::sanitize_message(&body, &self.secret_refs());
        let body = truncate_body(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TetherError::Authentication,
            StatusCode::NOT_FOUND => TetherError::not_found(path),
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("Rate limited by ConnectWise server");
                TetherError::RateLimited { retry_after }
            }
            StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                tracing::warn!(status = %status, "ConnectWise server temporarily unavailable");
                TetherError::ServiceUnavailable { status }
            }
            _ => TetherError::HttpStatus { status, body },
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        query: &QueryParams,
    ) -> Result<RawResponse, TetherError> {
        let operation = format!("{} {}", method, path);
        self.with_retry(&operation, || {
            self.issue_once(method.clone(), path, body, query)
        })
        .await
    }
}

/// Cuts an error body down to `MAX_ERROR_BODY_LEN` bytes on a char boundary.
fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body;
    }
    let mut cut = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[truncated]", &body[..cut])
}
