//! HTTP client for the recipes API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ListQuery, Query, SearchQuery},
    types::{Envelope, ListResponse, Recipe, SearchResponse},
    Error,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the recipes API.
///
/// Each request builds a fresh `reqwest::Client` with the configured timeout.
/// Failed requests are never retried.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL of the server hosting `/api/recipes`.
    base_api_url: String,
    timeout: Duration,
}

impl Client {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(segments, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .user_agent(concat!("recipedash/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
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

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(Envelope::Failure(payload)) => {
                tracing::error!("API reported error ({}): {}", status, payload.error);
                Err(Error::Api {
                    status: status.as_u16(),
                    message: payload.error,
                })
            }
            Ok(Envelope::Success(parsed)) if status.is_success() => Ok(parsed),
            _ if !status.is_success() => {
                let snippet = truncate_body(&body);
                tracing::error!("Request failed with status {}: {}", status, snippet);
                Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                })
            }
            _ => {
                tracing::error!("Failed to parse resource | body: {}", truncate_body(&body));
                Err(Error::RequestFailed)
            }
        }
    }

    /// Fetches one page of the unfiltered listing.
    pub async fn list_recipes(&self, query: &ListQuery) -> Result<ListResponse, Error> {
        self.get::<ListResponse, ListQuery>(&["api", "recipes"], Some(query))
            .await
    }

    /// Fetches every recipe matching the filter set.
    pub async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        self.get::<SearchResponse, SearchQuery>(&["api", "recipes", "search"], Some(query))
            .await
    }

    /// Fetches a single recipe by its identifier.
    pub async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, Error> {
        self.get::<Recipe, ListQuery>(&["api", "recipes", recipe_id], None)
            .await
    }
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
