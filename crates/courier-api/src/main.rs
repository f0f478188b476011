//! # courier-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Courier routing API.
//! Binds to a configurable port (default 8080).

use courier_api::bootstrap::{bootstrap, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // Optional — absent DATABASE_URL means in-memory stores.
    let pool = courier_store::init_pool().await.map_err(|e| {
        tracing::error!("Database initialization failed: {e}");
        e
    })?;

    let state = bootstrap(&config, pool).map_err(|e| {
        tracing::error!("Bootstrap failed: {e}");
        e
    })?;

    let app = courier_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Courier API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
