use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::Recipe;

/// Body of `GET /api/recipes`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListResponse {
    /// Page echoed back by the server.
    pub page: Option<i64>,
    /// Page size echoed back by the server.
    pub limit: Option<i64>,
    /// Number of recipes across all pages.
    pub total: i64,
    #[serde(default)]
    pub data: Vec<Recipe>,
}

/// Body of `GET /api/recipes/search`. The server returns every match at once.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Recipe>,
}

/// Failure payload the server sends instead of the resource.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorPayload {
    pub error: String,
}

#[derive(Deserialize)]
#[serde(untagged, bound = "T: DeserializeOwned")]
pub(crate) enum Envelope<T> {
    Failure(ErrorPayload),
    Success(T),
}
