// src/specs/events.rs
//! Scraping *spec* for the events listing.
//!
//! Layout (one block per fixture):
//! ```text
//! .event-list-group-container
//!   .event-name-team      x2   home, away
//!   .button-odds          x3+  1, X, 2 (extra markets ignored)
//!   .event-time
//!   .event-competition
//! ```
//!
//! A container that doesn't fit is skipped, the rest of the page still counts.
//! Only a body that isn't markup at all fails the whole call.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

use crate::core::sanitize::normalize_ws;
use crate::data::{MatchRecord, Odds};
use crate::error::ExtractError;

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| sel(".event-list-group-container"));
static TEAM: LazyLock<Selector> = LazyLock::new(|| sel(".event-name-team"));
static ODDS: LazyLock<Selector> = LazyLock::new(|| sel(".button-odds"));
static TIME: LazyLock<Selector> = LazyLock::new(|| sel(".event-time"));
static COMPETITION: LazyLock<Selector> = LazyLock::new(|| sel(".event-competition"));

/// Why one container was skipped. Never leaves this module.
#[derive(Debug, Error, PartialEq)]
enum Malformed {
    #[error("expected 2 team names, found {0}")]
    Teams(usize),
    #[error("expected 3 odds buttons, found {0}")]
    OddsCount(usize),
    #[error("unparsable odds {0:?}")]
    OddsValue(String),
    #[error("missing {0}")]
    Missing(&'static str),
}

/// Parse every well-formed event container in `markup`, in document order.
pub fn extract(markup: &str) -> Result<Vec<MatchRecord>, ExtractError> {
    check_markup(markup)?;

    let doc = Html::parse_document(markup);
    let mut out = Vec::new();
    let mut skipped = 0usize;

    for (i, container) in doc.select(&CONTAINER).enumerate() {
        match parse_container(container) {
            Ok(rec) => out.push(rec),
            Err(why) => {
                skipped += 1;
                debug!(container = i, %why, "skipping event");
            }
        }
    }

    debug!(events = out.len(), skipped, "extracted events");
    Ok(out)
}

fn check_markup(markup: &str) -> Result<(), ExtractError> {
    let body = markup.trim_start_matches('\u{feff}').trim_start();
    if body.is_empty() {
        return Err(ExtractError::Empty);
    }
    if !body.starts_with('<') {
        let head: String = body.chars().take(16).collect();
        return Err(ExtractError::NotMarkup(head));
    }
    Ok(())
}

fn parse_container(el: ElementRef<'_>) -> Result<MatchRecord, Malformed> {
    let teams: Vec<String> = el.select(&TEAM).map(text_of).collect();
    let [home, away] = <[String; 2]>::try_from(teams).map_err(|v| Malformed::Teams(v.len()))?;
    if home.is_empty() || away.is_empty() {
        return Err(Malformed::Missing("team name"));
    }

    let prices: Vec<String> = el.select(&ODDS).take(3).map(text_of).collect();
    if prices.len() < 3 {
        return Err(Malformed::OddsCount(prices.len()));
    }
    let mut parsed = [0f64; 3];
    for (slot, raw) in parsed.iter_mut().zip(&prices) {
        *slot = raw.parse::<f64>().map_err(|_| Malformed::OddsValue(raw.clone()))?;
    }
    let odds = Odds::new(parsed[0], parsed[1], parsed[2])
        .ok_or_else(|| Malformed::OddsValue(prices.join(" ")))?;

    let time = first_text(el, &TIME).ok_or(Malformed::Missing("time"))?;
    let competition = first_text(el, &COMPETITION).ok_or(Malformed::Missing("competition"))?;

    Ok(MatchRecord::new(home, away, odds, time, competition))
}

fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn first_text(el: ElementRef<'_>, selector: &Selector) -> Option<String> {
    el.select(selector).next().map(text_of)
}
