// src/search/client.rs
use reqwest::blocking::Client;

use crate::config::options::ApiOptions;
use super::{
    error::SearchError,
    types::{SearchRequest, SearchResponse},
};

/// Anything that can answer a search. The page never talks HTTP directly.
pub trait SearchApi: Send + Sync {
    fn search(&self, req: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

/// `POST {base}/search` with a JSON body.
pub struct HttpSearchApi {
    client: Client,
    endpoint: String,
}

impl HttpSearchApi {
    pub fn new(api: &ApiOptions) -> Result<Self, SearchError> {
        // No timeout: a hung backend keeps the page in its loading state.
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;
        Ok(Self { client, endpoint: api.search_url() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchApi for HttpSearchApi {
    fn search(&self, req: &SearchRequest) -> Result<SearchResponse, SearchError> {
        // `.json` sets `Content-Type: application/json`
        let resp = self.client.post(&self.endpoint).json(req).send()?;

        let status = resp.status();
        if !status.is_success() {
            // Status only; the body is dropped unread.
            return Err(SearchError::Status(status.as_u16()));
        }
        Ok(resp.json::<SearchResponse>()?)
    }
}
