//! # pricelistd — price list daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize logging
//! - Load the price catalog once from the CSV resource (a failed load is
//!   logged and serves an empty catalog — no retry, no error view)
//! - Build the axum router, injecting the shared catalog
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use pricelist_adapter_csv::CsvFileSource;
use pricelist_adapter_http_axum::state::AppState;
use pricelist_app::services::catalog_service::CatalogService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // The one-shot load: the catalog is immutable for the life of the
    // process, so no further fetches happen after this point.
    let source = CsvFileSource::new(config.data_path());
    let service = CatalogService::new(source);
    let catalog = service.load_catalog_or_empty().await;
    tracing::info!(services = catalog.len(), "price list loaded");

    let state = AppState::new(catalog);
    let app = pricelist_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "pricelistd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
