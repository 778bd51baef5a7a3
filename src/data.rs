// src/data.rs
use serde::{Deserialize, Serialize};

/// Three-way (1X2) decimal odds. All prices are finite and > 0, also when
/// read back from the cache.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOdds")]
pub struct Odds {
    home: f64,
    draw: f64,
    away: f64,
}

#[derive(Deserialize)]
struct RawOdds {
    home: f64,
    draw: f64,
    away: f64,
}

impl TryFrom<RawOdds> for Odds {
    type Error = String;

    fn try_from(raw: RawOdds) -> Result<Self, Self::Error> {
        Odds::new(raw.home, raw.draw, raw.away).ok_or_else(|| {
            format!("odds must be finite and positive: {} / {} / {}", raw.home, raw.draw, raw.away)
        })
    }
}

impl Odds {
    pub fn new(home: f64, draw: f64, away: f64) -> Option<Self> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        (ok(home) && ok(draw) && ok(away)).then_some(Self { home, draw, away })
    }

    pub fn home(&self) -> f64 { self.home }
    pub fn draw(&self) -> f64 { self.draw }
    pub fn away(&self) -> f64 { self.away }

    /// Bookmaker margin: sum of raw implied probabilities minus one.
    pub fn overround(&self) -> f64 {
        1.0 / self.home + 1.0 / self.draw + 1.0 / self.away - 1.0
    }

    /// Implied probabilities with the margin removed, summing to 1.
    pub fn implied_probabilities(&self) -> [f64; 3] {
        let book = 1.0 + self.overround();
        [
            1.0 / self.home / book,
            1.0 / self.draw / book,
            1.0 / self.away / book,
        ]
    }
}

/// One fixture as listed by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    teams: (String, String),
    odds: Odds,
    time: String,
    competition: String,
}

impl MatchRecord {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        odds: Odds,
        time: impl Into<String>,
        competition: impl Into<String>,
    ) -> Self {
        Self {
            teams: (home.into(), away.into()),
            odds,
            time: time.into(),
            competition: competition.into(),
        }
    }

    pub fn home_team(&self) -> &str { &self.teams.0 }
    pub fn away_team(&self) -> &str { &self.teams.1 }
    pub fn teams(&self) -> (&str, &str) { (&self.teams.0, &self.teams.1) }
    pub fn odds(&self) -> &Odds { &self.odds }
    pub fn time(&self) -> &str { &self.time }
    pub fn competition(&self) -> &str { &self.competition }
}
