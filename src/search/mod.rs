// src/search/mod.rs
//
// Everything the Search Page does that is not drawing: the wire types, the
// API seam, the single-owner page state and its projection into cards.

pub mod client;
pub mod error;
pub mod state;
pub mod types;
pub mod view;
pub mod worker;

pub use client::{HttpSearchApi, SearchApi};
pub use error::SearchError;
pub use state::{Field, PendingSearch, SearchState, submit_search};
pub use types::{SearchRequest, SearchResponse, SearchResult};
