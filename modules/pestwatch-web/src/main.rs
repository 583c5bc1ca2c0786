use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pestwatch_common::{Config, HotelDirectory};
use pestwatch_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pestwatch=info".parse()?))
        .init();

    let config = Config::web_from_env()?;

    let directory = match &config.dataset_path {
        Some(path) => HotelDirectory::load(path)?,
        None => HotelDirectory::embedded()?,
    };
    info!(hotels = directory.len(), "Hotel directory ready");

    let state = Arc::new(AppState::new(&config, directory));
    let app = build_router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Pestwatch web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
