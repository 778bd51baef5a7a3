// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// The odds provider could not be reached, or answered with a non-2xx status.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

/// The whole document is unusable. Single bad event containers never get here.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("empty response body")]
    Empty,
    #[error("response is not markup (starts with {0:?})")]
    NotMarkup(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not write cache {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize cache: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Anything that stops `get_events` from producing fresh records.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("invalid predictor config: {0}")]
    Config(String),
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected prediction response: {0}")]
    Response(String),
}
