//! OMDb API client
//!
//! Thin wrapper over the OMDb title-search endpoint. The base URL is
//! injectable so tests can point the client at a local mock server.

use reelbox_common::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("reelbox/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw OMDb search response, field names as OMDb sends them
///
/// `Response` is a stringly-typed success flag; OMDb reports "False" with
/// an `Error` message when a search has no results.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    pub search: Option<Vec<OmdbSearchItem>>,
    #[serde(rename = "Response", default = "default_response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

fn default_response() -> String {
    "True".to_string()
}

/// One raw OMDb search hit
///
/// All fields are optional at the wire level; schema validation happens
/// after normalization, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

/// OMDb API client
pub struct OmdbClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    /// Search OMDb by title
    ///
    /// A non-success HTTP status maps to `Error::Upstream` carrying the
    /// status code; an undecodable body maps to `Error::BadUpstreamShape`.
    pub async fn search(&self, title: &str) -> Result<OmdbSearchResponse> {
        tracing::debug!(title, "Querying OMDb search API");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("s", title), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| Error::Internal(format!("OMDb request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .json::<OmdbSearchResponse>()
            .await
            .map_err(|e| Error::BadUpstreamShape(format!("undecodable OMDb payload: {e}")))
    }
}
