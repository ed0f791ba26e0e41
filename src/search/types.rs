// src/search/types.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /search`. Built fresh for every submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub url: String,
    pub query: String,
}

/// One matching chunk of the searched page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub html: String,

    /// Relevance as a percentage. Absent ≠ zero: only absent hides the badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Fields the backend sends that this client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResult {
    pub fn new(html: impl Into<String>, score: Option<f64>) -> Self {
        Self { html: html.into(), score, extra: Map::new() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Missing and `null` both mean no results.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SearchResult>,
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<SearchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SearchResult>>::deserialize(de)?.unwrap_or_default())
}
