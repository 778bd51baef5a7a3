// src/core/mod.rs

pub mod fingerprint;
pub mod net;
pub mod sanitize;

pub use fingerprint::fingerprint;
pub use net::{Fetch, HttpFetcher};
