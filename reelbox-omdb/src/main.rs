//! reelbox-omdb - upstream-facing movie search service
//!
//! Normalizes the third-party OMDb search API into the stable internal
//! movie shape and serves the three fixed datasets to reelbox-api.

use anyhow::Result;
use reelbox_common::config::{OmdbConfig, Settings};
use reelbox_omdb::{build_router, AppState, OmdbClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Reelbox OMDb service (reelbox-omdb) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let settings = Settings::load();
    let config = OmdbConfig::load(&settings)?;

    let omdb = OmdbClient::new(config.base_url.clone(), config.api_key.clone())?;
    let state = AppState::new(omdb);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("reelbox-omdb listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
