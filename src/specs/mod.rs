// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction. Each spec knows *where the data lives in the
//! HTML* of one page and how to read it tolerantly; it does not fetch, cache,
//! or decide when to scrape.
//!
//! ## Typical call chain
//! ```text
//! CLI / session → scrape::Scraper::get_events → core::net::Fetch::fetch
//!                                           ↘ specs::events::extract
//!                                           ↘ store::save (outside of specs)
//! ```
//!
//! ## Conventions
//! - CSS selectors scoped to one repeating container per record.
//! - A bad container is skipped, never fatal. Only input that is not markup
//!   at all is an error.
//! - Testable offline against inline fixtures.
pub mod events;
