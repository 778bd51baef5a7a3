// src/scrape.rs
//! "Get events for these parameters": fingerprint, cache check, fetch,
//! extract, cache write.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::{
    config::options::ScrapeOptions,
    core::{fingerprint, Fetch, HttpFetcher},
    data::MatchRecord,
    error::{FetchError, ScrapeError},
    params::ParameterSet,
    progress::Progress,
    specs::events,
    store::{self, CacheEntry, CacheStore},
};

pub struct Scraper<F> {
    fetcher: F,
    store: CacheStore,
    ttl: Duration,
}

impl Scraper<HttpFetcher> {
    /// Live scraper against the configured endpoint and cache file.
    pub fn from_options(opts: &ScrapeOptions) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(opts)?;
        Ok(Self::new(fetcher, CacheStore::new(&opts.cache_path), opts.ttl))
    }
}

impl<F: Fetch> Scraper<F> {
    pub fn new(fetcher: F, store: CacheStore, ttl: Duration) -> Self {
        Self { fetcher, store, ttl }
    }

    pub fn fetcher(&self) -> &F { &self.fetcher }
    pub fn store(&self) -> &CacheStore { &self.store }

    /// Cached records if fresh, otherwise fetch + extract + cache.
    ///
    /// A failed fetch or unusable body leaves the cache file as it was.
    /// A failed cache write is logged and the fresh records are still returned.
    pub fn get_events(&self, params: &ParameterSet) -> Result<Vec<MatchRecord>, ScrapeError> {
        self.get_events_at(params, Utc::now())
    }

    /// `get_events` with an explicit clock.
    pub fn get_events_at(
        &self,
        params: &ParameterSet,
        now: DateTime<Utc>,
    ) -> Result<Vec<MatchRecord>, ScrapeError> {
        let key = fingerprint(params);
        let mut cache = self.store.load();

        if store::is_valid(cache.get(&key), now, self.ttl) {
            if let Some(hit) = cache.remove(&key) {
                info!(%key, events = hit.data.len(), "cache hit");
                return Ok(hit.data);
            }
        }

        info!(%key, "cache miss, fetching");
        let markup = self.fetcher.fetch(params)?;
        let records = events::extract(&markup)?;
        info!(%key, events = records.len(), "scraped events");

        cache.insert(key, CacheEntry::new(records.clone(), now));
        if let Err(e) = self.store.save(&cache) {
            error!(error = %e, "cache write failed, returning fresh data anyway");
        }
        Ok(records)
    }

    /// `get_events`, with failures reported to `progress` and turned into `None`.
    pub fn scrape_events(
        &self,
        params: &ParameterSet,
        progress: &mut dyn Progress,
    ) -> Option<Vec<MatchRecord>> {
        match self.get_events(params) {
            Ok(records) => Some(records),
            Err(e) => {
                error!(error = %e, "failed to fetch data");
                progress.failed(&format!("Failed to fetch data: {e}"));
                None
            }
        }
    }
}
