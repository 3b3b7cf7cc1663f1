mod cli;
mod handlers;

pub use cli::{App, ServeOptions, ServerConfig};

use crate::fact::FactClient;
use crate::prelude::*;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub fact: FactClient,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = ServerConfig::from(app.options);

    if global.verbose {
        log::debug!("Server configuration: {config:?}");
    }

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", config.addr, e))?;

    log::info!("numclass listening on http://{}", config.addr);
    log::info!(
        "Classify endpoint: http://{}/api/classify-number?number=<n>",
        config.addr
    );
    log::info!(
        "Fact provider: {} (timeout {} ms)",
        config.fact.base_url,
        config.fact.timeout.as_millis()
    );

    let state = AppState {
        fact: FactClient::new(config.fact),
    };

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the application router with CORS open to every origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/classify-number", get(handlers::classify_number))
        .layer(cors)
        .with_state(Arc::new(state))
}
