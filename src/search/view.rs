// src/search/view.rs
//
// Pure projection: SearchState → what the page shows. Both the egui page and
// the CLI draw from a PageView, so the rendering rules live in one place.

use crate::config::{
    consts::{HIDE_CONTENT, LOADING_CARDS, NO_RESULTS, VIEW_CONTENT},
    options::ViewOptions,
};
use crate::core::{format_markup, summarize};

use super::state::SearchState;

#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub cards: Vec<CardView>,
    pub error: Option<String>,
    pub empty_message: Option<&'static str>,
    /// Search button is disabled and relabelled while true.
    pub searching: bool,
}

/// A card is either a placeholder or a result; never both.
#[derive(Clone, Debug, PartialEq)]
pub enum CardView {
    Loading { shimmer: Vec<f32> },
    Populated(PopulatedCard),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopulatedCard {
    /// Position in the result list; the key for expand/collapse.
    pub index: usize,
    pub title: String,
    pub badge: Option<String>,
    pub expanded: bool,
    /// Formatted markup, only when expanded.
    pub detail: Option<String>,
}

impl PopulatedCard {
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded { HIDE_CONTENT } else { VIEW_CONTENT }
    }
}

impl PageView {
    pub fn button_label(&self) -> &'static str {
        if self.searching { "Searching..." } else { "Search" }
    }

    pub fn loading_cards(&self) -> usize {
        self.cards.iter().filter(|c| matches!(c, CardView::Loading { .. })).count()
    }

    pub fn populated_cards(&self) -> impl Iterator<Item = &PopulatedCard> {
        self.cards.iter().filter_map(|c| match c {
            CardView::Populated(p) => Some(p),
            CardView::Loading { .. } => None,
        })
    }
}

/// `0 %` still gets a badge; only a missing score hides it.
pub fn badge_text(score: f64) -> String {
    format!("{score}% match")
}

pub fn project(state: &SearchState, opts: &ViewOptions) -> PageView {
    let results = state.results();

    let cards: Vec<CardView> = if state.is_loading() && results.is_empty() {
        // Fixed decorative count; unrelated to how many results will arrive.
        (0..LOADING_CARDS)
            .map(|_| CardView::Loading { shimmer: opts.shimmer_lines.clone() })
            .collect()
    } else {
        results
            .iter()
            .enumerate()
            .map(|(index, r)| {
                let expanded = state.is_expanded(index);
                CardView::Populated(PopulatedCard {
                    index,
                    title: summarize(&r.html, opts.summary_words),
                    badge: r.score.map(badge_text),
                    expanded,
                    detail: expanded.then(|| format_markup(&r.html).into_owned()),
                })
            })
            .collect()
    };

    let error = state.error().filter(|e| !e.is_empty()).map(String::from);

    let empty_message = (state.has_attempted()
        && results.is_empty()
        && !state.is_loading()
        && error.is_none())
    .then_some(NO_RESULTS);

    PageView { cards, error, empty_message, searching: state.is_loading() }
}
