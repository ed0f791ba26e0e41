// src/search/state.rs
//
// Single source of truth for the Search Page (UI thread only).
// Every user event is one method call; drawing reads, never writes.

use std::collections::HashMap;

use super::{
    client::SearchApi,
    error::SearchError,
    types::{SearchRequest, SearchResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Url,
    Query,
}

/// A request that has been started but not yet resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub request: SearchRequest,
}

/// What `complete` did with an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer search was started after this one; outcome dropped.
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    url: String,
    query: String,

    results: Vec<SearchResult>,
    loading: bool,
    error: Option<String>,

    /// result index → expanded; absent = collapsed
    expanded: HashMap<usize, bool>,

    /// At least one search has resolved.
    attempted: bool,

    /// Sequence number of the most recently started search.
    seq: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /* ---------- reads ---------- */

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::Query => &self.query,
        }
    }
    pub fn url(&self) -> &str { &self.url }
    pub fn query(&self) -> &str { &self.query }
    pub fn results(&self) -> &[SearchResult] { &self.results }
    pub fn is_loading(&self) -> bool { self.loading }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }
    pub fn has_attempted(&self) -> bool { self.attempted }
    pub fn latest_seq(&self) -> u64 { self.seq }

    pub fn is_expanded(&self, idx: usize) -> bool {
        self.expanded.get(&idx).copied().unwrap_or(false)
    }

    /// Number of indices with an explicit flag (either value).
    pub fn expanded_len(&self) -> usize {
        self.expanded.len()
    }

    /* ---------- transitions ---------- */

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Url => self.url = value,
            Field::Query => self.query = value,
        }
    }

    /// Reset for a fresh attempt and hand out the request to send.
    ///
    /// Everything visible from the previous attempt is cleared here,
    /// before anything goes over the wire.
    pub fn begin_search(&mut self) -> PendingSearch {
        self.loading = true;
        self.error = None;
        self.results.clear();
        self.expanded.clear();

        self.seq += 1;
        let request = SearchRequest { url: self.url.clone(), query: self.query.clone() };
        logf!(
            "Search: Begin seq={} url_len={} query_len={}",
            self.seq,
            request.url.len(),
            request.query.len()
        );
        PendingSearch { seq: self.seq, request }
    }

    /// Apply the outcome of search `seq`. Only the latest search may write.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> Completion {
        if seq != self.seq {
            logd!("Search: Dropped stale seq={} (latest={})", seq, self.seq);
            return Completion::Stale;
        }

        match outcome {
            Ok(results) => {
                logf!("Search: OK seq={} results={}", seq, results.len());
                self.results = results;
            }
            Err(e) => {
                loge!("Search: Error seq={}: {}", seq, e);
                self.results.clear();
                self.error = Some(e.user_message());
            }
        }
        self.attempted = true;
        self.loading = false;
        Completion::Applied
    }

    /// Flip one card's detail pane; a fresh index starts collapsed, so the
    /// first flip expands it. Only rendered cards call this, which keeps the
    /// keys inside the current results range.
    pub fn toggle_expand(&mut self, idx: usize) -> bool {
        let flag = self.expanded.entry(idx).or_insert(false);
        *flag = !*flag;
        logd!("UI: card {} → {}", idx, if *flag { "expanded" } else { "collapsed" });
        *flag
    }
}

/// Run one whole attempt on the calling thread.
pub fn submit_search(state: &mut SearchState, api: &dyn SearchApi) -> Completion {
    let pending = state.begin_search();
    let outcome = api.search(&pending.request).map(|resp| resp.results);
    state.complete(pending.seq, outcome)
}
