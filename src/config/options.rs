// src/config/options.rs
use super::consts::*;
use crate::search::error::SearchError;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub view: ViewOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    /// Scheme + host (+ port), never with a trailing slash.
    base_url: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self { base_url: s!(DEFAULT_API_BASE) }
    }
}

impl ApiOptions {
    /// Unset or blank falls back to the default base.
    pub fn from_base(raw: Option<&str>) -> Result<Self, SearchError> {
        let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE);
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(SearchError::Config(format!(
                "API base must start with http:// or https:// (got {raw:?})"
            )));
        }
        let base = raw.trim_end_matches('/');
        if base.ends_with(':') || base.ends_with("//") {
            return Err(SearchError::Config(format!("API base has no host (got {raw:?})")));
        }
        Ok(Self { base_url: s!(base) })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewOptions {
    pub summary_words: usize,
    /// Relative widths of the loading placeholder's shimmer bars.
    pub shimmer_lines: Vec<f32>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            summary_words: SUMMARY_WORDS,
            shimmer_lines: DEFAULT_SHIMMER.to_vec(),
        }
    }
}

impl AppOptions {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self, SearchError> {
        match dotenvy::dotenv() {
            Ok(path) => logd!("Config: loaded {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => loge!("Config: .env ignored: {}", e),
        }
        let raw = std::env::var(API_URL_ENV).ok();
        let api = ApiOptions::from_base(raw.as_deref())?;
        logf!("Config: api base → {}", api.base_url());
        Ok(Self { api, view: ViewOptions::default() })
    }

    pub fn with_api_base(mut self, raw: &str) -> Result<Self, SearchError> {
        self.api = ApiOptions::from_base(Some(raw))?;
        Ok(self)
    }
}
