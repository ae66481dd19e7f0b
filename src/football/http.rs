//! HTTP request dispatch against the football-data.org competitions API.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, ReportKind},
    config::ApiConfig,
    error::FootyError,
    Result,
};


/// Decoded response body, passed on without shape checks.
pub type RawPayload = Value;

/// Header carrying the API credential.
pub const AUTH_HEADER: &str = "x-auth-token";

const USER_AGENT: &str = concat!("footy/", env!("CARGO_PKG_VERSION"));

/// Issues one GET per report request. No retries, no caching.
#[derive(Debug, Clone)]
pub struct FootballDataClient {
    client: Client,
    base_url: String,
}

impl FootballDataClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(auth_headers(&config.api_key)?)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FootyError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `<base>/<league><suffix>`
    pub fn resource_url(&self, kind: ReportKind, league_id: &LeagueId) -> String {
        format!("{}/{}{}", self.base_url, league_id, kind.path_suffix())
    }

    /// Fetch the raw payload for one report.
    pub async fn fetch(&self, kind: ReportKind, league_id: &LeagueId) -> Result<RawPayload> {
        let url = self.resource_url(kind, league_id);
        debug!(%url, %kind, "requesting");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_builder() {
                FootyError::Config {
                    message: format!("invalid request URL {url}: {e}"),
                }
            } else {
                FootyError::ConnectionFailed(e)
            }
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(FootyError::HttpStatus(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                FootyError::malformed(kind, format!("response body is not JSON: {e}"))
            } else {
                FootyError::ConnectionFailed(e)
            }
        })
    }
}

/// Default headers: JSON accept plus the credential (marked sensitive).
fn auth_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut token = HeaderValue::from_str(api_key)?;
    token.set_sensitive(true);
    headers.insert(HeaderName::from_static(AUTH_HEADER), token);
    Ok(headers)
}
