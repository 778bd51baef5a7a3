// src/store.rs
//! Local JSON cache of scraped listings, keyed by parameter fingerprint.
//!
//! The file is read in full on every lookup and rewritten in full on every
//! save. No state is kept in memory between calls and there is no locking:
//! two processes saving at once means the last writer wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::MatchRecord;
use crate::error::StoreError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Vec<MatchRecord>,
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(data: Vec<MatchRecord>, timestamp: DateTime<Utc>) -> Self {
        Self { data, timestamp }
    }
}

/// Fingerprint → entry. Sorted so the file diffs cleanly between saves.
pub type CacheMap = BTreeMap<String, CacheEntry>;

#[derive(Clone, Debug)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole cache from disk. Missing or unreadable file, or contents that
    /// aren't a valid cache map, all come back as an empty map.
    pub fn load(&self) -> CacheMap {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no cache file yet");
                return CacheMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cache unreadable, starting empty");
                return CacheMap::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cache corrupt, starting empty");
                CacheMap::new()
            }
        }
    }

    /// Overwrite the cache file with `cache`.
    pub fn save(&self, cache: &CacheMap) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(cache)?;
        let file = fs::File::create(&self.path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        out.write_all(&bytes).map_err(io_err)?;
        out.flush().map_err(io_err)?;
        debug!(path = %self.path.display(), entries = cache.len(), "cache saved");
        Ok(())
    }
}

/// Fresh iff present and younger than `ttl` at `now`.
pub fn is_valid(entry: Option<&CacheEntry>, now: DateTime<Utc>, ttl: Duration) -> bool {
    let Some(entry) = entry else { return false };
    let Ok(ttl) = chrono::Duration::from_std(ttl) else {
        // Longer than chrono can represent: never expires.
        return true;
    };
    now.signed_duration_since(entry.timestamp) < ttl
}
