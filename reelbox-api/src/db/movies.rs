//! Movie storage adapter

use crate::ports::{MovieStore, UpsertOutcome};
use async_trait::async_trait;
use reelbox_common::{Movie, Result};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// SQLite-backed [`MovieStore`]
#[derive(Clone)]
pub struct SqliteMovieStore {
    pool: SqlitePool,
}

impl SqliteMovieStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_movie(row: &SqliteRow) -> Movie {
    Movie {
        imdb_id: row.get("imdb_id"),
        title: row.get("title"),
        year: row.get("year"),
        kind: row.get("type"),
        poster_url: row.get("poster_url"),
    }
}

/// Escape LIKE wildcards so the query text matches literally
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl MovieStore for SqliteMovieStore {
    async fn get_all(&self) -> Result<Vec<Movie>> {
        let rows = sqlx::query(
            "SELECT imdb_id, title, year, type, poster_url FROM movies ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_movie).collect())
    }

    async fn get_by_title(&self, query: &str) -> Result<Vec<Movie>> {
        // SQLite LIKE is case-insensitive for ASCII
        let rows = sqlx::query(
            r#"
            SELECT imdb_id, title, year, type, poster_url
            FROM movies
            WHERE title LIKE '%' || ?1 || '%' ESCAPE '\'
            ORDER BY title ASC
            "#,
        )
        .bind(escape_like(query))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_movie).collect())
    }

    async fn get_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>> {
        let row = sqlx::query(
            "SELECT imdb_id, title, year, type, poster_url FROM movies WHERE imdb_id = ?1",
        )
        .bind(imdb_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_movie))
    }

    async fn upsert_movie(&self, movie: &Movie) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO movies (imdb_id, title, year, type, poster_url, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT(imdb_id) DO UPDATE SET
                title = excluded.title,
                year = excluded.year,
                type = excluded.type,
                poster_url = excluded.poster_url,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(&movie.imdb_id)
        .bind(&movie.title)
        .bind(&movie.year)
        .bind(&movie.kind)
        .bind(&movie.poster_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn upsert_movies(&self, movies: &[Movie]) -> Result<UpsertOutcome> {
        let mut outcome = UpsertOutcome::default();
        for movie in movies {
            let exists = self.get_by_imdb_id(&movie.imdb_id).await?.is_some();
            self.upsert_movie(movie).await?;
            if exists {
                outcome.updated += 1;
            } else {
                outcome.inserted += 1;
            }
        }
        Ok(outcome)
    }
}
