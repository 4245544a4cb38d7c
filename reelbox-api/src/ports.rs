//! Port contracts for the backend API
//!
//! Storage, import-log and upstream-fetch capabilities are expressed as
//! object-safe traits so the refresh coordinator receives its collaborators
//! explicitly at construction time. SQLite adapters live in `crate::db`;
//! the HTTP fetcher in `crate::upstream`; tests substitute in-memory fakes.

use async_trait::async_trait;
use reelbox_common::{ImportLogEntry, Movie, MoviesResponse, Result};

/// Per-record outcome counts of a batch upsert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub inserted: usize,
    pub updated: usize,
}

/// The three upstream datasets reelbox-omdb serves
///
/// `lookup` knows the canonical query strings; everything else falls back
/// to [`Dataset::DEFAULT`] at the caller's discretion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Matrix,
    Reloaded,
    Revolutions,
}

impl Dataset {
    pub const DEFAULT: Dataset = Dataset::Revolutions;

    /// Map a canonical query string to its dataset
    pub fn lookup(query: &str) -> Option<Self> {
        match query {
            "Matrix" => Some(Dataset::Matrix),
            "Matrix Reloaded" => Some(Dataset::Reloaded),
            "Matrix Revolutions" => Some(Dataset::Revolutions),
            _ => None,
        }
    }

    /// URL path of this dataset on the omdb backend
    pub fn path(&self) -> &'static str {
        match self {
            Dataset::Matrix => "movies",
            Dataset::Reloaded => "movies-reloaded",
            Dataset::Revolutions => "movies-revolutions",
        }
    }
}

/// Persistence capability for movie records
///
/// Identifier uniqueness is the storage invariant: at most one record per
/// IMDb id, upserts update in place.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All records, title ascending
    async fn get_all(&self) -> Result<Vec<Movie>>;

    /// Case-insensitive title-substring match, title ascending
    async fn get_by_title(&self, query: &str) -> Result<Vec<Movie>>;

    async fn get_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>>;

    async fn upsert_movie(&self, movie: &Movie) -> Result<()>;

    /// Batch upsert; counts reflect the actual per-record outcome
    async fn upsert_movies(&self, movies: &[Movie]) -> Result<UpsertOutcome>;
}

/// Tracking of "when was query Q last successfully imported"
#[async_trait]
pub trait ImportLog: Send + Sync {
    async fn last_import(&self, query: &str) -> Result<Option<ImportLogEntry>>;

    /// Upsert semantics: create with current time if absent, otherwise
    /// overwrite the timestamp with current time
    async fn mark_imported(&self, query: &str) -> Result<()>;
}

/// Upstream dataset fetch capability, consumed only on refresh
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    async fn fetch(&self, dataset: Dataset) -> Result<MoviesResponse>;
}
