// src/core/net.rs
// Blocking HTTP GET against the events listing.

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::options::ScrapeOptions;
use crate::error::FetchError;
use crate::params::ParameterSet;

/// Source of raw listing markup. `HttpFetcher` in production, mocks in tests.
pub trait Fetch {
    fn fetch(&self, params: &ParameterSet) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(opts.user_agent.as_str());
        if let Some(t) = opts.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|source| FetchError::Transport {
            url: opts.endpoint.clone(),
            source,
        })?;
        Ok(Self { client, endpoint: opts.endpoint.clone() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Fetch for HttpFetcher {
    /// One GET, no retries. Any non-2xx status is an error.
    fn fetch(&self, params: &ParameterSet) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport { url: self.endpoint.clone(), source };

        let resp = self.client
            .get(&self.endpoint)
            .query(&params.query_pairs())
            .send()
            .map_err(transport)?;

        let status = resp.status();
        let url = resp.url().to_string();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "events listing rejected");
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body = resp.text().map_err(transport)?;
        debug!(%url, bytes = body.len(), "events listing fetched");
        Ok(body)
    }
}
