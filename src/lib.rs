// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod log;
pub mod params;
pub mod predict;
pub mod progress;
pub mod scrape;
pub mod session;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::core::fingerprint;
pub use data::{MatchRecord, Odds};
pub use params::{ParamValue, ParameterSet};
pub use scrape::Scraper;
pub use store::{CacheEntry, CacheStore};
