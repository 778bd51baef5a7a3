// src/bin/cli.rs
use odds_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // .env is optional
    let _ = dotenvy::dotenv();
    if let Err(e) = log::init() {
        eprintln!("Warning: file logging disabled: {e}");
    }
    cli::run()
}
