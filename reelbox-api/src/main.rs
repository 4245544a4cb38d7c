//! reelbox-api - backend API with TTL-gated movie cache
//!
//! Serves the resolve endpoints and the web UI. Storage and import-log
//! adapters are constructed here, once, and handed to the refresh
//! coordinator explicitly.

use anyhow::Result;
use reelbox_api::db::{self, SqliteImportLog, SqliteMovieStore};
use reelbox_api::upstream::OmdbBackendClient;
use reelbox_api::{build_router, AppState, Resolver};
use reelbox_common::config::{ApiConfig, Settings};
use std::sync::Arc;
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
        "Starting Reelbox API (reelbox-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let settings = Settings::load();
    let config = ApiConfig::load(&settings)?;
    info!("Database path: {}", config.database_path.display());
    info!("Refresh interval: {}ms", config.refresh_time_ms);

    let pool = db::connect(&config.database_path).await?;
    info!("✓ Connected to database");

    let store = Arc::new(SqliteMovieStore::new(pool.clone()));
    let import_log = Arc::new(SqliteImportLog::new(pool));
    let fetcher = Arc::new(OmdbBackendClient::new(config.omdb_backend_url.clone())?);
    let resolver = Resolver::new(store, import_log, fetcher, config.refresh_time_ms);

    let state = AppState::new(resolver);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("reelbox-api listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
