//! Entry point for the `heroes-api` HTTP server.

use std::sync::Arc;

use heroes_api::{config::ServerConfig, routes::create_router};
use heroes_store::{seed, SqliteStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();

    let store = match SqliteStore::connect(&config.store).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(url = %config.store.database_url, error = %e, "failed to open store");
            std::process::exit(1);
        }
    };

    if config.seed {
        if let Err(e) = seed(&store).await {
            tracing::error!(error = %e, "failed to seed store");
            std::process::exit(1);
        }
    }

    let app = create_router(Arc::new(store));

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "heroes-api listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
