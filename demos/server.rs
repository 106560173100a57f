//! Example server: reads config from env (and `.env`), seeds the in-memory catalog, mounts common and package routes.
//!
//! Run: `cargo run --example server`, then `curl localhost:3000/api/v1/packages`.

use case_bridge::{app_router, AppConfig, AppState, CatalogService, PackageStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("case_bridge=info")))
        .init();

    let state = AppState::new(PackageStore::new());
    if config.seed_demo_data {
        CatalogService::seed_demo(&state.store)?;
    }

    let app = app_router(state, &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
