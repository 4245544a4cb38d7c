//! Import log adapter
//!
//! One row per query string recording the last successful import time.

use crate::ports::ImportLog;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reelbox_common::{ImportLogEntry, Result};
use sqlx::{Row, SqlitePool};

/// SQLite-backed [`ImportLog`]
#[derive(Clone)]
pub struct SqliteImportLog {
    pool: SqlitePool,
}

impl SqliteImportLog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImportLog for SqliteImportLog {
    async fn last_import(&self, query: &str) -> Result<Option<ImportLogEntry>> {
        let row = sqlx::query("SELECT query, fetched_at FROM import_log WHERE query = ?1")
            .bind(query)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| ImportLogEntry {
            query: row.get("query"),
            fetched_at: row.get::<DateTime<Utc>, _>("fetched_at"),
        }))
    }

    async fn mark_imported(&self, query: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO import_log (query, fetched_at)
            VALUES (?1, ?2)
            ON CONFLICT(query) DO UPDATE SET fetched_at = excluded.fetched_at
            "#,
        )
        .bind(query)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
