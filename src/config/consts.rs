// src/config/consts.rs

// Net config
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const API_URL_ENV: &str = "SEARCH_API_URL";
pub const SEARCH_PATH: &str = "/search";

// Local debug log
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "PAGE_SEARCH_LOG";

// View
pub const SUMMARY_WORDS: usize = 10;
pub const LOADING_CARDS: usize = 3;
pub const DEFAULT_SHIMMER: [f32; 3] = [1.0, 0.83, 0.66];
pub const ELLIPSIS: &str = "...";

// User-facing text
pub const FAILED_FETCH: &str = "Failed to fetch results";
pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const NO_RESULTS: &str = "No results found.";
pub const VIEW_CONTENT: &str = "View content";
pub const HIDE_CONTENT: &str = "Hide content";
