// tests/session.rs
//
// analyze_match with canned odds and a canned predictor.
//
use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use odds_scrape::core::Fetch;
use odds_scrape::error::{FetchError, PredictError};
use odds_scrape::predict::{Predict, Prediction};
use odds_scrape::progress::{NullProgress, RecordedProgress};
use odds_scrape::session::{self, History};
use odds_scrape::{CacheStore, ParameterSet, Scraper};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("odds_session_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

struct Listing(Option<&'static str>);

impl Fetch for Listing {
    fn fetch(&self, _params: &ParameterSet) -> Result<String, FetchError> {
        match self.0 {
            Some(body) => Ok(body.to_string()),
            None => Err(FetchError::Status { url: "mock://events".into(), status: 502 }),
        }
    }
}

const PAGE: &str = r#"<html><body>
  <div class="event-list-group-container">
    <div class="event-time">20:00</div><div class="event-competition">England Premier League</div>
    <span class="event-name-team">Manchester City</span><span class="event-name-team">Liverpool</span>
    <span class="button-odds">1.85</span><span class="button-odds">3.90</span><span class="button-odds">4.10</span>
  </div>
</body></html>"#;

struct Canned {
    fail: bool,
    calls: Cell<usize>,
}

impl Predict for Canned {
    fn analyze(&self, home: &str, away: &str) -> Result<Prediction, PredictError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(PredictError::Response("model unavailable".into()));
        }
        Ok(Prediction {
            team_stats: format!("{home} strong at home"),
            sentiment_analysis: "mixed".into(),
            match_context: format!("{away} missing a striker"),
            prediction: "Home win, 55%".into(),
        })
    }
}

fn canned(fail: bool) -> Canned {
    Canned { fail, calls: Cell::new(0) }
}

fn scraper(dir: &PathBuf, page: Option<&'static str>) -> Scraper<Listing> {
    Scraper::new(Listing(page), CacheStore::new(dir.join("cache.json")), Duration::from_secs(900))
}

#[test]
fn appends_entry_with_matching_odds() {
    let dir = tmp_dir("append");
    let s = scraper(&dir, Some(PAGE));
    let params = ParameterSet::default_listing();

    let history = session::analyze_match(
        History::new(), &s, &canned(false), &params, "manchester city", "Liverpool", &mut NullProgress,
    )
    .unwrap();
    assert_eq!(history.len(), 1);
    let entry = &history[0];
    assert_eq!(entry.teams, "manchester city vs Liverpool");
    assert_eq!(entry.prediction.prediction, "Home win, 55%");
    let odds = entry.odds.as_ref().unwrap().odds();
    assert_eq!((odds.home(), odds.draw(), odds.away()), (1.85, 3.90, 4.10));

    // Second run keeps the first entry; odds come from cache this time.
    let history = session::analyze_match(
        history, &s, &canned(false), &params, "Arsenal", "Chelsea", &mut NullProgress,
    )
    .unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[1].odds.is_none());
}

#[test]
fn scrape_failure_still_runs_analysis() {
    let dir = tmp_dir("scrape_fail");
    let s = scraper(&dir, None);
    let predictor = canned(false);
    let mut progress = RecordedProgress::default();

    let history = session::analyze_match(
        History::new(), &s, &predictor, &ParameterSet::default_listing(),
        "Manchester City", "Liverpool", &mut progress,
    )
    .unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].odds.is_none());
    assert_eq!(predictor.calls.get(), 1);
    assert_eq!(progress.failures.len(), 1);
    assert!(progress.finished);
}

#[test]
fn prediction_failure_hands_history_back() {
    let dir = tmp_dir("predict_fail");
    let s = scraper(&dir, Some(PAGE));
    let params = ParameterSet::default_listing();

    let history = session::analyze_match(
        History::new(), &s, &canned(false), &params, "A", "B", &mut NullProgress,
    )
    .unwrap();

    let (kept, err) = session::analyze_match(
        history, &s, &canned(true), &params, "C", "D", &mut NullProgress,
    )
    .unwrap_err();
    assert_eq!(kept.len(), 1);
    assert!(matches!(err, PredictError::Response(_)));
}

#[test]
fn history_file_round_trips() {
    let dir = tmp_dir("history_file");
    let path = dir.join("nested").join("history.json");
    assert!(session::load_history(&path).is_empty());

    let s = scraper(&dir, Some(PAGE));
    let history = session::analyze_match(
        History::new(), &s, &canned(false), &ParameterSet::default_listing(),
        "Manchester City", "Liverpool", &mut NullProgress,
    )
    .unwrap();
    session::save_history(&path, &history).unwrap();
    assert_eq!(session::load_history(&path), history);

    fs::write(&path, "not json").unwrap();
    assert!(session::load_history(&path).is_empty());
}
