//! SQLite persistence layer for reelbox-api
//!
//! One pool, two tables: `movies` keyed by IMDb id and `import_log` keyed
//! by query string. The schema is created on startup if missing.

use reelbox_common::Result;
use sqlx::SqlitePool;
use std::path::Path;

mod import_log;
mod movies;

pub use import_log::SqliteImportLog;
pub use movies::SqliteMovieStore;

/// Connect to the database, creating file and schema as needed
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePool::connect(&db_url).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Create the tables if they do not exist
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            imdb_id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            year TEXT NOT NULL,
            type TEXT NOT NULL,
            poster_url TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS import_log (
            query TEXT PRIMARY KEY,
            fetched_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    init_schema(&pool).await.expect("Failed to create schema");
    pool
}
