// tests/cli_render.rs
#![cfg(feature = "cli")]
mod common;

use common::{Canned, hello_result};
use page_search::cli::{self, Args};
use page_search::config::options::AppOptions;
use page_search::search::{SearchError, SearchResult};

fn args(expand: Vec<usize>, json: bool) -> Args {
    Args { url: "https://example.com".into(), query: "q".into(), api: None, expand, json }
}

#[test]
fn prints_one_line_per_card() {
    let api = Canned::ok(vec![hello_result(), SearchResult::new("<i>no score</i>", None)]);
    let rep = cli::run_with(&args(vec![], false), &AppOptions::default(), &api).expect("run");
    assert!(!rep.failed);
    assert_eq!(rep.text, " 1. hello world foo bar ...  [87% match]\n 2. no score ...\n");
}

#[test]
fn expand_prints_formatted_markup() {
    let api = Canned::ok(vec![SearchResult::new("<a></a>", Some(5.0))]);
    let rep = cli::run_with(&args(vec![1, 1, 9], false), &AppOptions::default(), &api).expect("run");
    assert_eq!(rep.text, " 1. ...  [5% match]\n      <a>\n      </a>\n");
}

#[test]
fn errors_and_empty_pages() {
    let api = Canned::err(SearchError::Status(500));
    let rep = cli::run_with(&args(vec![], false), &AppOptions::default(), &api).expect("run");
    assert!(rep.failed);
    assert_eq!(rep.text, "Error: Failed to fetch results\n");

    let api = Canned::ok(vec![]);
    let rep = cli::run_with(&args(vec![], false), &AppOptions::default(), &api).expect("run");
    assert_eq!(rep.text, "No results found.\n");
}

#[test]
fn json_dumps_results() {
    let api = Canned::ok(vec![hello_result()]);
    let rep = cli::run_with(&args(vec![], true), &AppOptions::default(), &api).expect("run");
    let v: serde_json::Value = serde_json::from_str(&rep.text).expect("json");
    assert_eq!(v[0]["score"], 87.0);
}
