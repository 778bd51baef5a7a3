// src/cli.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    config::{consts::*, options::AppOptions},
    data::MatchRecord,
    params::ParameterSet,
    predict::PerplexityPredictor,
    progress::Progress,
    scrape::Scraper,
    session,
    store,
};

#[derive(Debug, Parser)]
#[command(name = "odds_scrape", version, about = "Scrape 1X2 football odds and analyze a match")]
pub struct Cli {
    /// Cache file (default: betpawa_cache.json, env ODDS_CACHE_FILE)
    #[arg(long, global = true)]
    pub cache_file: Option<PathBuf>,

    /// Cache lifetime in seconds (default: 900, env ODDS_CACHE_TTL_SECS)
    #[arg(long, global = true)]
    pub ttl: Option<u64>,

    /// Events listing URL (env ODDS_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List current fixtures and odds
    Events {
        #[command(flatten)]
        query: Query,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Analyze one match and show its odds
    Analyze {
        #[arg(long, default_value = "Manchester City")]
        home: String,
        #[arg(long, default_value = "Liverpool")]
        away: String,
        #[command(flatten)]
        query: Query,
        /// Model sampling temperature (0.1..=1.0)
        #[arg(long)]
        temperature: Option<f32>,
        /// Where past analyses are kept
        #[arg(long, default_value = ".store/history.json")]
        history: PathBuf,
    },
    /// Show past analyses
    History {
        #[arg(long, default_value = ".store/history.json")]
        history: PathBuf,
    },
    /// Show what the cache holds and whether it is fresh
    Cache,
}

#[derive(Debug, Args)]
pub struct Query {
    #[arg(long, default_value = DEFAULT_MARKET_ID)]
    pub market_id: String,
    /// Comma-separated competition ids
    #[arg(long, default_value = DEFAULT_COMPETITIONS)]
    pub competitions: String,
    #[arg(long, default_value = DEFAULT_CATEGORY_ID)]
    pub category_id: String,
}

impl Query {
    pub fn params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("marketId", self.market_id.as_str())
            .with("competitions", self.competitions.as_str())
            .with("categoryId", self.category_id.as_str())
    }
}

/// Prints status to stderr.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn failed(&mut self, msg: &str) { eprintln!("Error: {msg}"); }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = resolve_options(&cli);

    match cli.command {
        Command::Events { query, json } => cmd_events(&opts, &query.params(), json),
        Command::Analyze { home, away, query, temperature, history } => {
            let mut opts = opts;
            if let Some(t) = temperature {
                opts.predict.temperature = t;
            }
            cmd_analyze(&opts, &query.params(), &home, &away, &history)
        }
        Command::History { history } => cmd_history(&history),
        Command::Cache => cmd_cache(&opts),
    }
}

/// Env first, then flags on top.
fn resolve_options(cli: &Cli) -> AppOptions {
    let mut opts = AppOptions::from_env();
    if let Some(p) = &cli.cache_file {
        opts.scrape.cache_path = p.clone();
    }
    if let Some(secs) = cli.ttl {
        opts.scrape.ttl = Duration::from_secs(secs);
    }
    if let Some(url) = &cli.endpoint {
        opts.scrape.endpoint = url.clone();
    }
    opts
}

fn cmd_events(opts: &AppOptions, params: &ParameterSet, json: bool) -> Result<()> {
    let scraper = Scraper::from_options(&opts.scrape)?;
    let mut progress = ConsoleProgress;
    progress.log(&format!("Listing {}", scraper.fetcher().endpoint()));
    let Some(events) = scraper.scrape_events(params, &mut progress) else {
        return Err(eyre!("no data"));
    };

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &events)?;
        writeln!(out)?;
    } else {
        write_table(&mut out, &events)?;
    }
    Ok(())
}

fn cmd_analyze(
    opts: &AppOptions,
    params: &ParameterSet,
    home: &str,
    away: &str,
    history_path: &Path,
) -> Result<()> {
    let scraper = Scraper::from_options(&opts.scrape)?;
    let predictor = PerplexityPredictor::new(&opts.predict)?;
    let history = session::load_history(history_path);

    let history = session::analyze_match(
        history, &scraper, &predictor, params, home, away, &mut ConsoleProgress,
    )
    .map_err(|(_, e)| e)?;
    session::save_history(history_path, &history)
        .wrap_err_with(|| format!("saving {}", history_path.display()))?;

    let Some(latest) = history.last() else { return Ok(()) };
    let mut out = io::stdout().lock();
    for (title, body) in latest.prediction.sections() {
        writeln!(out, "== {title}\n{body}\n")?;
    }
    match &latest.odds {
        Some(rec) => write_odds(&mut out, rec, home, away)?,
        None => writeln!(out, "No odds data available for this match")?,
    }
    Ok(())
}

fn cmd_history(path: &Path) -> Result<()> {
    let history = session::load_history(path);
    if history.is_empty() {
        println!("No analyses yet");
        return Ok(());
    }
    for entry in &history {
        let odds = entry.odds.as_ref().map(|r| {
            let o = r.odds();
            format!("{:.2} / {:.2} / {:.2}", o.home(), o.draw(), o.away())
        });
        println!(
            "{}  {}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.teams,
            odds.unwrap_or_else(|| s!("no odds")),
        );
    }
    Ok(())
}

fn cmd_cache(opts: &AppOptions) -> Result<()> {
    let store = store::CacheStore::new(&opts.scrape.cache_path);
    let mut out = io::stdout().lock();
    write_cache(&mut out, &store, opts.scrape.ttl, Utc::now())?;
    Ok(())
}

fn write_cache(
    out: &mut impl Write,
    store: &store::CacheStore,
    ttl: Duration,
    now: DateTime<Utc>,
) -> io::Result<()> {
    let cache = store.load();
    if cache.is_empty() {
        return writeln!(out, "Cache {} is empty", store.path().display());
    }
    for (key, entry) in &cache {
        let age = now.signed_duration_since(entry.timestamp).num_seconds();
        let fresh = store::is_valid(Some(entry), now, ttl);
        writeln!(
            out,
            "{}  {:>4} events  {:>6}s old  {}",
            short_key(key),
            entry.data.len(),
            age,
            if fresh { "fresh" } else { "stale" },
        )?;
    }
    Ok(())
}

/// First 12 characters. Keys come from a file and need not be hex.
fn short_key(key: &str) -> &str {
    match key.char_indices().nth(12) {
        Some((end, _)) => &key[..end],
        None => key,
    }
}

fn write_table(out: &mut impl Write, events: &[MatchRecord]) -> io::Result<()> {
    if events.is_empty() {
        return writeln!(out, "No events listed");
    }
    writeln!(out, "{:<8} {:<28} {:<24} {:<24} {:>6} {:>6} {:>6}", "Time", "Competition", "Home", "Away", "1", "X", "2")?;
    for e in events {
        let o = e.odds();
        writeln!(
            out,
            "{:<8} {:<28} {:<24} {:<24} {:>6.2} {:>6.2} {:>6.2}",
            e.time(), e.competition(), e.home_team(), e.away_team(), o.home(), o.draw(), o.away(),
        )?;
    }
    Ok(())
}

fn write_odds(out: &mut impl Write, rec: &MatchRecord, home: &str, away: &str) -> io::Result<()> {
    let o = rec.odds();
    let [ph, pd, pa] = o.implied_probabilities();
    writeln!(out, "== Live Odds ({}, {})", rec.competition(), rec.time())?;
    writeln!(out, "{home} Win  {:.2}  ({:.0}%)", o.home(), ph * 100.0)?;
    writeln!(out, "Draw  {:.2}  ({:.0}%)", o.draw(), pd * 100.0)?;
    writeln!(out, "{away} Win  {:.2}  ({:.0}%)", o.away(), pa * 100.0)?;
    writeln!(out, "Margin {:.1}%", o.overround() * 100.0)
}
