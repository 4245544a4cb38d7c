//! HTTP client for the omdb backend datasets
//!
//! Implements [`DatasetFetcher`] against reelbox-omdb. Decoding failures
//! are shape errors; non-success statuses carry the upstream status code.
//! Schema validation of the decoded batch happens in the refresh
//! coordinator, before anything is written.

use crate::ports::{Dataset, DatasetFetcher};
use async_trait::async_trait;
use reelbox_common::{Error, MoviesResponse, Result};
use std::time::Duration;

const USER_AGENT: &str = concat!("reelbox/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the reelbox-omdb dataset endpoints
pub struct OmdbBackendClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OmdbBackendClient {
    pub fn new(base_url: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DatasetFetcher for OmdbBackendClient {
    async fn fetch(&self, dataset: Dataset) -> Result<MoviesResponse> {
        let url = format!("{}/{}", self.base_url, dataset.path());
        tracing::debug!(%url, "Fetching dataset from omdb backend");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Internal(format!("omdb backend request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .json::<MoviesResponse>()
            .await
            .map_err(|e| Error::BadUpstreamShape(format!("undecodable dataset payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::mock;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_fetch_decodes_dataset() {
        let _m = mock("GET", "/movies")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "items": [
                        { "imdbID": "tt0133093", "title": "The Matrix", "year": "1999",
                          "type": "movie", "posterUrl": null }
                    ]
                })
                .to_string(),
            )
            .create();

        let client = OmdbBackendClient::new(mockito::server_url()).expect("client should build");
        let response = client.fetch(Dataset::Matrix).await.expect("fetch should succeed");

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].imdb_id, "tt0133093");
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_maps_status_to_upstream_error() {
        let _m = mock("GET", "/movies-reloaded")
            .with_status(503)
            .with_body(json!({ "error": "down" }).to_string())
            .create();

        let client = OmdbBackendClient::new(mockito::server_url()).expect("client should build");
        let err = client
            .fetch(Dataset::Reloaded)
            .await
            .expect_err("fetch should fail");

        assert!(matches!(err, Error::Upstream { status: 503 }));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_rejects_undecodable_payload() {
        let _m = mock("GET", "/movies-revolutions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "foo": "bar" }).to_string())
            .create();

        let client = OmdbBackendClient::new(mockito::server_url()).expect("client should build");
        let err = client
            .fetch(Dataset::Revolutions)
            .await
            .expect_err("fetch should fail");

        assert!(matches!(err, Error::BadUpstreamShape(_)));
    }
}
