//! Staleness-gated refresh coordination
//!
//! For a given query string the resolver produces the current best-known
//! list of matching records, pulling fresh data from the upstream fetcher
//! when the cached import is missing or stale. Storage is never written
//! with unvalidated data, and the import log is only marked after a
//! successful upsert, so a failed refresh is retried on the next call.

use crate::ports::{Dataset, DatasetFetcher, ImportLog, MovieStore};
use chrono::{Duration, Utc};
use reelbox_common::models::validate_movies;
use reelbox_common::{Movie, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one resolution call
#[derive(Debug, Clone)]
pub struct Resolution {
    pub items: Vec<Movie>,
    pub refreshed: bool,
}

/// Refresh coordinator
///
/// Collaborators are injected once at startup; concurrent calls for the
/// same query are independent and may both refresh (upserts are idempotent
/// by identifier, so the race is wasteful, not corrupting).
pub struct Resolver {
    store: Arc<dyn MovieStore>,
    import_log: Arc<dyn ImportLog>,
    fetcher: Arc<dyn DatasetFetcher>,
    refresh_interval: Duration,
}

impl Resolver {
    pub fn new(
        store: Arc<dyn MovieStore>,
        import_log: Arc<dyn ImportLog>,
        fetcher: Arc<dyn DatasetFetcher>,
        refresh_interval_ms: u64,
    ) -> Self {
        Self {
            store,
            import_log,
            fetcher,
            refresh_interval: Duration::milliseconds(refresh_interval_ms as i64),
        }
    }

    /// Resolve a query against storage, refreshing from upstream if stale
    ///
    /// The staleness boundary is inclusive: an import aged exactly
    /// `refresh_interval` is stale, and an interval of zero refreshes on
    /// every call.
    pub async fn resolve(&self, query: &str) -> Result<Resolution> {
        let entry = self.import_log.last_import(query).await?;
        let needs_refresh = match &entry {
            None => true,
            Some(entry) => {
                Utc::now().signed_duration_since(entry.fetched_at) >= self.refresh_interval
            }
        };

        // Baseline read; superseded by the post-refresh read below
        let mut items = self.store.get_by_title(query).await?;

        if needs_refresh {
            let dataset = Dataset::lookup(query).unwrap_or_else(|| {
                warn!(
                    query,
                    fallback = Dataset::DEFAULT.path(),
                    "No dedicated upstream dataset for query, using fallback"
                );
                Dataset::DEFAULT
            });

            let response = self.fetcher.fetch(dataset).await?;
            validate_movies(&response.items)?;

            let outcome = self.store.upsert_movies(&response.items).await?;
            self.import_log.mark_imported(query).await?;
            info!(
                query,
                inserted = outcome.inserted,
                updated = outcome.updated,
                "Imported upstream dataset"
            );

            items = self.store.get_by_title(query).await?;
        }

        Ok(Resolution {
            items,
            refreshed: needs_refresh,
        })
    }
}
