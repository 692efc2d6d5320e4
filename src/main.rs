//! Tether - command line smoke check for ConnectWise Manage and Automate
//!
//! Connects with the configured credentials, checks the connection and
//! counts the items of one collection by walking every page.
//!
//! # Configuration
//!
//! Set the `CW_*` environment variables (or use a `.env` file); see
//! `tether::config` for the full list.
//!
//! # Usage
//!
//! ```bash
//! # Count Manage personas (or Automate contacts)
//! ./tether
//!
//! # Count the teams on service board 3
//! ./tether service/boards/3/teams
//! ```

use anyhow::{Context, Result};
use futures::StreamExt;
use tracing_subscriber::{fmt, EnvFilter};

use tether::client::{ConnectWiseClient, AUTOMATE_CHECK_PATH, MANAGE_CHECK_PATH};
use tether::config::{ApiKind, Config};

const PAGE_SIZE: u32 = 100;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the result only
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tether=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting tether v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(base_url = %config.base_url, kind = ?config.kind(), "Configuration loaded");

    let client = ConnectWiseClient::connect(&config)
        .await
        .context("Failed to create ConnectWise client")?;

    if let Err(e) = client.test_connection().await {
        tracing::warn!(error = %e, "Connection test failed; continuing anyway");
    }

    let path = std::env::args().nth(1).unwrap_or_else(|| {
        match client.kind() {
            ApiKind::Manage => MANAGE_CHECK_PATH,
            ApiKind::Automate => AUTOMATE_CHECK_PATH,
        }
        .to_string()
    });

    let endpoint = client
        .endpoint(&path)
        .with_context(|| format!("Unknown endpoint {}", path))?;
    let first = endpoint
        .paginated::<serde_json::Value>(1, PAGE_SIZE, None)
        .await
        .with_context(|| format!("Failed to fetch /{}", endpoint.full_path()))?;

    if let Some(last) = first.last_page() {
        tracing::info!(pages = last, "Server reports page count");
    }

    let items = first.iterate_all();
    futures::pin_mut!(items);
    let mut count: u64 = 0;
    while let Some(item) = items.next().await {
        item.context("Failed while paging")?;
        count += 1;
    }

    println!("{}\t{}", endpoint.full_path(), count);
    tracing::info!(path = %endpoint.full_path(), count, "Done");

    Ok(())
}
