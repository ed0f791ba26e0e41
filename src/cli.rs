// src/cli.rs
//
// Headless front end: one search, same state machine and projection as the
// GUI, cards printed as plain text.

use std::fmt::Write as _;

use clap::Parser;

use crate::{
    config::options::AppOptions,
    search::{
        Field, HttpSearchApi, SearchApi, SearchError, SearchState, submit_search,
        view::{self, CardView, PageView},
    },
};

#[derive(Parser, Debug, Clone)]
#[command(name = "cli", version, about = "Search one page through the /search API")]
pub struct Args {
    /// Page to search
    #[arg(short, long)]
    pub url: String,

    /// What to look for
    #[arg(short, long)]
    pub query: String,

    /// API base, overrides SEARCH_API_URL
    #[arg(long)]
    pub api: Option<String>,

    /// Result numbers (1-based) whose raw content to print, e.g. 1,3
    #[arg(long, value_delimiter = ',')]
    pub expand: Vec<usize>,

    /// Print the raw results as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

pub struct Report {
    pub text: String,
    /// The search ended with an error message on the page.
    pub failed: bool,
}

pub fn run(args: &Args) -> Result<Report, SearchError> {
    let mut options = AppOptions::from_env()?;
    if let Some(base) = &args.api {
        options = options.with_api_base(base)?;
    }
    let api = HttpSearchApi::new(&options.api)?;
    logf!("CLI: endpoint={}", api.endpoint());
    run_with(args, &options, &api)
}

pub fn run_with(args: &Args, options: &AppOptions, api: &dyn SearchApi) -> Result<Report, SearchError> {
    let mut state = SearchState::new();
    state.update_field(Field::Url, args.url.as_str());
    state.update_field(Field::Query, args.query.as_str());
    submit_search(&mut state, api);

    let mut wanted = args.expand.clone();
    wanted.sort_unstable();
    wanted.dedup();
    for n in wanted {
        if (1..=state.results().len()).contains(&n) {
            state.toggle_expand(n - 1);
        }
    }

    let failed = state.error().is_some();
    let text = if args.json && !failed {
        serde_json::to_string_pretty(state.results())
            .map(|mut s| { s.push('\n'); s })
            .map_err(|e| SearchError::Decode(e.to_string()))?
    } else {
        render_text(&view::project(&state, &options.view))
    };
    Ok(Report { text, failed })
}

/// Plain-text rendering of a page snapshot.
pub fn render_text(view: &PageView) -> String {
    let mut out = s!();

    if let Some(err) = &view.error {
        let _ = writeln!(out, "Error: {err}");
    }

    for card in &view.cards {
        match card {
            CardView::Loading { .. } => out.push_str("[loading]\n"),
            CardView::Populated(p) => {
                let _ = write!(out, "{:>2}. {}", p.index + 1, p.title);
                if let Some(badge) = &p.badge {
                    let _ = write!(out, "  [{badge}]");
                }
                out.push('\n');
                if let Some(detail) = &p.detail {
                    for line in detail.lines() {
                        let _ = writeln!(out, "      {line}");
                    }
                }
            }
        }
    }

    if let Some(msg) = view.empty_message {
        let _ = writeln!(out, "{msg}");
    }
    out
}
