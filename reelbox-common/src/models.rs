//! Movie contract types shared by the Reelbox services
//!
//! These are the wire shapes spoken between reelbox-omdb, reelbox-api and
//! the web UI. Field names on the wire follow the original frontend
//! contract (`imdbID`, `posterUrl`, `type`).

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One movie record, keyed by its IMDb catalog identifier
///
/// `year` stays a string: OMDb reports ranges like "2003–2005" for series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    /// Category ("movie", "series", ...); serialized as `type`
    #[serde(rename = "type")]
    pub kind: String,
    /// Absent when the upstream has no poster for the title
    #[serde(rename = "posterUrl")]
    pub poster_url: Option<String>,
}

/// Batch of movies as served by reelbox-omdb and consumed by reelbox-api
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviesResponse {
    pub items: Vec<Movie>,
}

/// Last successful import timestamp for one query string
///
/// At most one entry exists per query; `mark_imported` overwrites the
/// timestamp in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportLogEntry {
    pub query: String,
    pub fetched_at: DateTime<Utc>,
}

/// Validate a single movie against the internal schema
///
/// Requires non-empty identifier/title/year/type; the poster URL, when
/// present, must parse as an absolute URL.
pub fn validate_movie(movie: &Movie) -> Result<()> {
    if movie.imdb_id.is_empty() {
        return Err(Error::BadUpstreamShape("empty imdbID".to_string()));
    }
    if movie.title.is_empty() {
        return Err(Error::BadUpstreamShape(format!(
            "empty title for {}",
            movie.imdb_id
        )));
    }
    if movie.year.is_empty() {
        return Err(Error::BadUpstreamShape(format!(
            "empty year for {}",
            movie.imdb_id
        )));
    }
    if movie.kind.is_empty() {
        return Err(Error::BadUpstreamShape(format!(
            "empty type for {}",
            movie.imdb_id
        )));
    }
    if let Some(poster) = &movie.poster_url {
        url::Url::parse(poster).map_err(|e| {
            Error::BadUpstreamShape(format!("invalid poster URL for {}: {}", movie.imdb_id, e))
        })?;
    }
    Ok(())
}

/// Validate a full batch; any invalid item rejects the whole batch
pub fn validate_movies(movies: &[Movie]) -> Result<()> {
    for movie in movies {
        validate_movie(movie)?;
    }
    Ok(())
}
