//! # Tether
//!
//! Tether is a typed client for the ConnectWise Manage and ConnectWise
//! Automate REST APIs.
//!
//! Both APIs expose hundreds of resources arranged in a path hierarchy
//! (`service/boards/{id}/teams/{id}`). Instead of one type per path, tether
//! describes the hierarchy as data: a static route table declares which
//! verbs each path supports and what they return, and a single
//! [`Endpoint`](endpoint::Endpoint) handle walks it.
//!
//! ## Features
//!
//! - **Endpoint tree**: `child`, `with_id` and `at` navigate the route table;
//!   `get`, `post`, `put`, `patch` and `delete` issue one request each
//! - **Pagination**: `paginated` returns a page that knows how to fetch the
//!   next one, honouring `Link` headers and falling back to the page size
//! - **Error handling**: transient failures are retried in the HTTP transport
//!   with exponential backoff; nothing above it retries
//! - **Security**: private keys, passwords and tokens are never logged and are
//!   scrubbed from error bodies
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - The crate's error type
//! - [`routes`] - The Manage and Automate route tables
//! - [`endpoint`] - Endpoint handles and verb dispatch
//! - [`pagination`] - Paginated collections
//! - [`shape`] - Parsing response bodies into items
//! - [`transport`] - The transport trait and raw responses
//! - [`http`] - The reqwest transport
//! - [`client`] - Ties a route table to a transport
//! - [`models`] - Typed items for common resources
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads `CW_API`,
//! `CW_BASE_URL`, `CW_CLIENT_ID` and the product's credentials
//! (`CW_COMPANY_ID`/`CW_PUBLIC_KEY`/`CW_PRIVATE_KEY` for Manage,
//! `CW_AUTOMATE_TOKEN` or `CW_AUTOMATE_USERNAME`/`CW_AUTOMATE_PASSWORD` for
//! Automate).
//!
//! ## Example
//!
//! ```ignore
//! use futures::StreamExt;
//! use tether::client::ConnectWiseClient;
//! use tether::config::Config;
//! use tether::models::BoardTeam;
//!
//! async fn example() -> Result<(), tether::error::TetherError> {
//!     let client = ConnectWiseClient::connect(&Config::from_env()?).await?;
//!     let teams = client.endpoint("service/boards")?.with_id(3).child("teams")?;
//!
//!     let mut all = teams.paginated::<BoardTeam>(1, 50, None).await?.iterate_all();
//!     futures::pin_mut!(all);
//!     while let Some(team) = all.next().await {
//!         println!("{}", team?.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod shape;
pub mod transport;
