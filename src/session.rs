// src/session.rs
//! One "analyze this match" run, and the history of runs.
//!
//! The history belongs to the caller: it goes in, comes back with one more
//! entry, and can be written to / read from a JSON file between runs.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    core::{sanitize::team_key, Fetch},
    data::MatchRecord,
    error::PredictError,
    params::ParameterSet,
    predict::{Predict, Prediction},
    progress::Progress,
    scrape::Scraper,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEntry {
    pub timestamp: DateTime<Utc>,
    /// "Home vs Away", as typed by the user.
    pub teams: String,
    pub prediction: Prediction,
    /// The listed fixture for these two teams, if the listing had one.
    pub odds: Option<MatchRecord>,
}

pub type History = Vec<AnalysisEntry>;

/// First record whose two teams are `home` and `away`, in either order,
/// compared case-insensitively.
pub fn find_match_odds<'a>(events: &'a [MatchRecord], home: &str, away: &str) -> Option<&'a MatchRecord> {
    let (h, a) = (team_key(home), team_key(away));
    events.iter().find(|e| {
        let (t1, t2) = e.teams();
        let (t1, t2) = (team_key(t1), team_key(t2));
        (t1 == h || t2 == h) && (t1 == a || t2 == a)
    })
}

/// Scrape odds, run the predictor, append the result to `history`.
///
/// A failed scrape only means no odds in the entry (reported to `progress`).
/// A failed prediction fails the run and hands the history back untouched.
pub fn analyze_match<F, P>(
    mut history: History,
    scraper: &Scraper<F>,
    predictor: &P,
    params: &ParameterSet,
    home: &str,
    away: &str,
    progress: &mut dyn Progress,
) -> Result<History, (History, PredictError)>
where
    F: Fetch,
    P: Predict + ?Sized,
{
    progress.log("Fetching live odds…");
    let events = scraper.scrape_events(params, &mut *progress).unwrap_or_default();

    progress.log("Analyzing match…");
    let prediction = match predictor.analyze(home, away) {
        Ok(p) => p,
        Err(e) => {
            progress.failed(&format!("Analysis failed: {e}"));
            progress.finish();
            return Err((history, e));
        }
    };

    let odds = find_match_odds(&events, home, away).cloned();
    if odds.is_none() {
        info!(home, away, listed = events.len(), "no listed odds for this match");
    }

    history.push(AnalysisEntry {
        timestamp: Utc::now(),
        teams: format!("{home} vs {away}"),
        prediction,
        odds,
    });
    progress.finish();
    Ok(history)
}

/// Empty when the file is missing or unreadable.
pub fn load_history(path: &Path) -> History {
    match fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "history corrupt, starting fresh");
            History::new()
        }),
        Err(_) => History::new(),
    }
}

pub fn save_history(path: &Path, history: &[AnalysisEntry]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(history)?;
    fs::write(path, json)
}
