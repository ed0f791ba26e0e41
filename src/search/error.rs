// src/search/error.rs
use crate::config::consts::{FAILED_FETCH, UNKNOWN_ERROR};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Connection refused, DNS, reset, ...
    #[error("{0}")]
    Transport(String),

    /// Any non-2xx answer. Status is kept for the log only.
    #[error("Failed to fetch results (HTTP {0})")]
    Status(u16),

    /// 2xx, but the body was not the expected JSON.
    #[error("{0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SearchError {
    /// The one line shown under the search bar.
    pub fn user_message(&self) -> String {
        let msg = match self {
            SearchError::Status(_) => s!(FAILED_FETCH),
            other => other.to_string(),
        };
        if msg.trim().is_empty() { s!(UNKNOWN_ERROR) } else { msg }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SearchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            SearchError::Status(status.as_u16())
        } else {
            SearchError::Transport(e.to_string())
        }
    }
}
