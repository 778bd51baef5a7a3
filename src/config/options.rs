// src/config/options.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub predict: PredictOptions,
}

impl AppOptions {
    pub fn from_env() -> Self {
        Self {
            scrape: ScrapeOptions::from_env(),
            predict: PredictOptions::from_env(),
        }
    }
}

/// Where to fetch from, where to cache, and for how long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub endpoint: String,
    pub user_agent: String,
    pub cache_path: PathBuf,
    pub ttl: Duration,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout: Option<Duration>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(EVENTS_URL),
            user_agent: s!(USER_AGENT),
            cache_path: PathBuf::from(CACHE_FILE),
            ttl: Duration::from_secs(CACHE_TTL_SECS),
            timeout: None,
        }
    }
}

impl ScrapeOptions {
    /// Defaults, overridden by `ODDS_ENDPOINT`, `ODDS_CACHE_FILE`, `ODDS_CACHE_TTL_SECS`.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(url) = env_str("ODDS_ENDPOINT") {
            opts.endpoint = url;
        }
        if let Some(path) = env_str("ODDS_CACHE_FILE") {
            opts.cache_path = PathBuf::from(path);
        }
        if let Some(secs) = env_str("ODDS_CACHE_TTL_SECS").and_then(|v| v.parse::<u64>().ok()) {
            opts.ttl = Duration::from_secs(secs);
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictOptions {
    pub api_key: Option<String>,
    pub endpoint: String,
    /// Key into the known model table, not the provider's model name.
    pub model: String,
    pub temperature: f32,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: s!(PPLX_URL),
            model: s!(PPLX_MODEL_KEY),
            temperature: PPLX_TEMPERATURE,
        }
    }
}

impl PredictOptions {
    /// Defaults, overridden by `PPLX_API_KEY`, `PPLX_MODEL`, `PPLX_TEMPERATURE`.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        opts.api_key = env_str("PPLX_API_KEY");
        if let Some(model) = env_str("PPLX_MODEL") {
            opts.model = model;
        }
        if let Some(t) = env_str("PPLX_TEMPERATURE").and_then(|v| v.parse::<f32>().ok()) {
            opts.temperature = t;
        }
        opts
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
