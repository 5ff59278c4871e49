use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{Error, Result};

/// Position-suggest endpoint the city name is appended to.
pub const DEFAULT_BASE_URL: &str = "http://api.goeuro.com/api/v2/position/suggest/en/";
const USER_AGENT: &str = concat!("suggest2csv/", env!("CARGO_PKG_VERSION"));

/// Longest slice of a bad response body quoted back in a parse error.
const SNIPPET_LEN: usize = 80;

/// Append `city` to `base_url` verbatim.
///
/// Nothing is escaped here. A city that produces a malformed URL fails
/// later, when the request is sent.
pub fn build_url(base_url: &str, city: &str) -> String {
    format!("{}{}", base_url, city)
}

/// Blocking HTTP client for the suggest endpoint.
#[derive(Debug)]
pub struct SuggestClient {
    client: reqwest::blocking::Client,
}

impl SuggestClient {
    /// Build a client. `timeout` of `None` keeps reqwest's default.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and return the whole body as text.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        let network = |source: reqwest::Error| Error::Network {
            url: url.to_string(),
            source,
        };

        debug!(url, "requesting placemarks");
        let response = self.client.get(url).send().map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(network)?;
        debug!(url, bytes = body.len(), "response received");
        Ok(body)
    }

    /// Fetch and parse the suggestions for `city`.
    pub fn fetch_placemarks(&self, base_url: &str, city: &str) -> Result<Vec<Value>> {
        let url = build_url(base_url, city);
        let body = self.fetch_text(&url)?;
        parse_placemarks(&body)
    }
}

/// Parse a response body as a JSON array, keeping element order.
pub fn parse_placemarks(text: &str) -> Result<Vec<Value>> {
    serde_json::from_str::<Vec<Value>>(text).map_err(|source| Error::Parse {
        snippet: snippet(text),
        source,
    })
}

fn snippet(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(SNIPPET_LEN) {
        Some((end, _)) => format!("{}...", &trimmed[..end]),
        None => trimmed.to_string(),
    }
}
