// src/search/worker.rs
//
// Runs each search on its own thread so the UI thread never blocks.
// Completions come back over a channel and are applied on the UI thread.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use super::{
    client::SearchApi,
    error::SearchError,
    state::PendingSearch,
    types::SearchResult,
};

/// `(seq, outcome)` for one finished request.
pub type Outcome = (u64, Result<Vec<SearchResult>, SearchError>);

pub struct SearchWorker {
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
}

impl Default for SearchWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchWorker {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Fire and forget. `notify` runs after the outcome is queued
    /// (the GUI passes a repaint request), on every path.
    pub fn dispatch<F>(&self, pending: PendingSearch, api: Arc<dyn SearchApi>, notify: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let notify = Arc::new(notify);
        let PendingSearch { seq, request } = pending;

        let tx = self.tx.clone();
        let on_done = Arc::clone(&notify);
        let spawned = thread::Builder::new()
            .name(format!("search-{seq}"))
            .spawn(move || {
                let outcome = api.search(&request).map(|resp| resp.results);
                deliver(&tx, (seq, outcome), &*on_done);
            });

        if let Err(e) = spawned {
            loge!("Worker: spawn failed seq={}: {}", seq, e);
            let outcome = Err(SearchError::Transport(e.to_string()));
            deliver(&self.tx, (seq, outcome), &*notify);
        }
    }

    /// Everything finished since the last call, in arrival order. Never blocks.
    pub fn drain(&self) -> Vec<Outcome> {
        self.rx.try_iter().collect()
    }

    /// Blocks for the next outcome. Headless callers and tests only.
    pub fn recv(&self) -> Option<Outcome> {
        self.rx.recv().ok()
    }
}

/// Queue one outcome and wake the UI. False if the receiver is gone
/// (app closed), in which case nobody is woken.
fn deliver(tx: &Sender<Outcome>, outcome: Outcome, notify: &dyn Fn()) -> bool {
    let seq = outcome.0;
    match tx.send(outcome) {
        Ok(()) => {
            notify();
            true
        }
        Err(_) => {
            logd!("Worker: receiver gone, seq={} dropped", seq);
            false
        }
    }
}
