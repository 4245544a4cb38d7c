//! Normalization of raw OMDb payloads into the internal movie shape
//!
//! Rules, in order:
//! - `Response: "False"` is OMDb's documented no-results signal and yields
//!   an empty batch, not an error.
//! - `Response: "True"` without a `Search` array is a shape violation.
//! - Field names are renamed straight across; the `Poster` sentinel "N/A"
//!   (or an empty string) becomes an absent poster.
//! - The normalized batch must pass schema validation as a whole; one bad
//!   item rejects the batch.

use crate::omdb::{OmdbSearchItem, OmdbSearchResponse};
use reelbox_common::models::validate_movies;
use reelbox_common::{Error, Movie, MoviesResponse, Result};

/// OMDb's "no poster available" sentinel
const NO_POSTER: &str = "N/A";

/// Convert one raw OMDb search hit into the internal record shape
pub fn normalize_item(item: OmdbSearchItem) -> Movie {
    let poster_url = match item.poster {
        Some(p) if !p.is_empty() && p != NO_POSTER => Some(p),
        _ => None,
    };
    Movie {
        imdb_id: item.imdb_id,
        title: item.title,
        year: item.year,
        kind: item.kind,
        poster_url,
    }
}

/// Normalize and validate a full OMDb search response
pub fn normalize_response(raw: OmdbSearchResponse) -> Result<MoviesResponse> {
    let has_results = raw.response == "True";
    if has_results && raw.search.is_none() {
        return Err(Error::BadUpstreamShape(
            "missing Search array in OMDb response".to_string(),
        ));
    }
    if !has_results {
        tracing::debug!(
            reason = raw.error.as_deref().unwrap_or("unspecified"),
            "OMDb reported no results"
        );
    }

    let items: Vec<Movie> = raw
        .search
        .unwrap_or_default()
        .into_iter()
        .map(normalize_item)
        .collect();
    validate_movies(&items)?;

    Ok(MoviesResponse { items })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item(title: &str, imdb_id: &str, poster: Option<&str>) -> OmdbSearchItem {
        OmdbSearchItem {
            title: title.to_string(),
            year: "1999".to_string(),
            imdb_id: imdb_id.to_string(),
            kind: "movie".to_string(),
            poster: poster.map(str::to_string),
        }
    }

    fn raw_response(items: Vec<OmdbSearchItem>) -> OmdbSearchResponse {
        OmdbSearchResponse {
            search: Some(items),
            response: "True".to_string(),
            error: None,
        }
    }

    #[test]
    fn test_poster_sentinel_maps_to_absent() {
        let movie = normalize_item(raw_item("The Matrix Reloaded", "tt0234215", Some("N/A")));
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn test_empty_poster_maps_to_absent() {
        let movie = normalize_item(raw_item("The Matrix", "tt0133093", Some("")));
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn test_real_poster_survives() {
        let movie = normalize_item(raw_item("The Matrix", "tt0133093", Some("https://x/y.jpg")));
        assert_eq!(movie.poster_url.as_deref(), Some("https://x/y.jpg"));
    }

    #[test]
    fn test_field_renames() {
        let movie = normalize_item(raw_item("The Matrix", "tt0133093", None));
        assert_eq!(movie.imdb_id, "tt0133093");
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year, "1999");
        assert_eq!(movie.kind, "movie");
    }

    #[test]
    fn test_no_results_flag_yields_empty_batch() {
        let raw = OmdbSearchResponse {
            search: None,
            response: "False".to_string(),
            error: Some("Movie not found!".to_string()),
        };
        let normalized = normalize_response(raw).expect("no-results is not an error");
        assert!(normalized.items.is_empty());
    }

    #[test]
    fn test_success_without_search_array_is_shape_error() {
        let raw = OmdbSearchResponse {
            search: None,
            response: "True".to_string(),
            error: None,
        };
        assert!(matches!(
            normalize_response(raw),
            Err(Error::BadUpstreamShape(_))
        ));
    }

    #[test]
    fn test_invalid_item_rejects_whole_batch() {
        let good = raw_item("The Matrix", "tt0133093", None);
        let bad = raw_item("", "tt0234215", None);
        assert!(matches!(
            normalize_response(raw_response(vec![good, bad])),
            Err(Error::BadUpstreamShape(_))
        ));
    }

    #[test]
    fn test_normalizes_mixed_batch() {
        let raw = raw_response(vec![
            raw_item("The Matrix", "tt0133093", Some("https://x/y.jpg")),
            raw_item("The Matrix Reloaded", "tt0234215", Some("N/A")),
        ]);
        let normalized = normalize_response(raw).expect("batch should validate");
        assert_eq!(normalized.items.len(), 2);
        assert_eq!(
            normalized.items[0].poster_url.as_deref(),
            Some("https://x/y.jpg")
        );
        assert_eq!(normalized.items[1].poster_url, None);
    }
}
