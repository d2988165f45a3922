//! HTTP client for The Blue Alliance read API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{Event, Match, Team},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.thebluealliance.com/api/v3";

/// Static client identifier sent with every request.
pub const DEFAULT_APP_ID: &str = "frcstats:leaderboard:1";

/// HTTP client for The Blue Alliance API.
///
/// Every request carries the static client identifier, both as the
/// `X-TBA-Auth-Key` header and as the `X-TBA-App-Id` query parameter that
/// older API versions expect. Each request builds a fresh `reqwest::Client`
/// with the configured timeout. Nothing is retried.
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    app_id: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Replaces the client identifier sent with each request.
    pub fn with_app_id(mut self, app_id: &str) -> Self {
        self.app_id = app_id.to_string();
        self
    }

    /// Replaces the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        url.query_pairs_mut().append_pair("X-TBA-App-Id", &self.app_id);
        Ok(url)
    }

    /// Fetches `path` and returns the body as untyped JSON so callers can
    /// check its shape before decoding.
    async fn get_value(&self, path: &str) -> Result<serde_json::Value, Error> {
        let url = self.get_url(path)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .header("X-TBA-Auth-Key", &self.app_id)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::warn!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let value = self.get_value(path).await?;
        decode(value)
    }

    /// Like [`Client::get`], but rejects any body that is not a JSON array
    /// before decoding. Some error responses arrive with a success status
    /// and an object body.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let value = self.get_value(path).await?;
        if !value.is_array() {
            let snippet = truncate_body(&value.to_string());
            tracing::warn!("Expected a list from {}: {}", path, snippet);
            return Err(Error::UnexpectedShape(snippet));
        }
        decode(value)
    }

    /// Fetches a single team by its number.
    pub async fn get_team(&self, team_number: u32) -> Result<Team, Error> {
        self.get::<Team>(format!("/team/{}", Team::key_for(team_number)).as_str())
            .await
    }

    /// Fetches the events a team attended in `year`.
    pub async fn get_team_events(&self, team_number: u32, year: i32) -> Result<Vec<Event>, Error> {
        self.get_list::<Event>(
            format!("/team/{}/events/{}", Team::key_for(team_number), year).as_str(),
        )
        .await
    }

    /// Fetches every match played at an event.
    pub async fn get_event_matches(&self, event_key: &str) -> Result<Vec<Match>, Error> {
        self.get_list::<Match>(format!("/event/{}/matches", event_key).as_str())
            .await
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, Error> {
    serde_json::from_value::<T>(value).map_err(|e| {
        tracing::error!("Failed to decode resource: {}", e);
        Error::RequestFailed
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
