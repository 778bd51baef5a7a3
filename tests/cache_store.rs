// tests/cache_store.rs
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use odds_scrape::error::StoreError;
use odds_scrape::store::{CacheEntry, CacheMap, CacheStore};
use odds_scrape::{MatchRecord, Odds};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("odds_cache_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_entry() -> CacheEntry {
    let rec = MatchRecord::new("A", "B", Odds::new(1.5, 3.2, 2.1).unwrap(), "18:00", "X");
    CacheEntry::new(vec![rec], Utc::now())
}

#[test]
fn load_missing_file_is_empty() {
    let dir = tmp_dir("missing");
    let store = CacheStore::new(dir.join("nope.json"));
    assert!(store.load().is_empty());
}

#[test]
fn load_corrupt_file_is_empty() {
    let dir = tmp_dir("corrupt");
    let path = dir.join("cache.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(CacheStore::new(&path).load().is_empty());

    // Valid JSON, wrong shape
    fs::write(&path, r#"{"k": {"data": 3}}"#).unwrap();
    assert!(CacheStore::new(&path).load().is_empty());
}

#[test]
fn load_rejects_non_positive_odds() {
    let dir = tmp_dir("bad_odds");
    let path = dir.join("cache.json");
    let ts = Utc::now().to_rfc3339();
    fs::write(
        &path,
        format!(
            r#"{{"k": {{"data": [{{"teams": ["A", "B"], "odds": {{"home": 0.0, "draw": -3.2, "away": 2.1}},
                "time": "18:00", "competition": "X"}}], "timestamp": "{ts}"}}}}"#
        ),
    )
    .unwrap();
    assert!(CacheStore::new(&path).load().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tmp_dir("roundtrip");
    let store = CacheStore::new(dir.join("sub").join("cache.json"));

    let mut map = CacheMap::new();
    map.insert("abc".to_string(), sample_entry());
    store.save(&map).unwrap();

    assert_eq!(store.load(), map);
}

#[test]
fn save_rewrites_whole_file() {
    let dir = tmp_dir("rewrite");
    let store = CacheStore::new(dir.join("cache.json"));

    let mut first = CacheMap::new();
    first.insert("one".to_string(), sample_entry());
    first.insert("two".to_string(), sample_entry());
    store.save(&first).unwrap();

    let mut second = CacheMap::new();
    second.insert("three".to_string(), sample_entry());
    store.save(&second).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains_key("three"));
}

#[test]
fn file_shape_is_fingerprint_to_data_and_timestamp() {
    let dir = tmp_dir("shape");
    let path = dir.join("cache.json");
    let mut map = CacheMap::new();
    map.insert("abc".to_string(), sample_entry());
    CacheStore::new(&path).save(&map).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &raw["abc"];
    assert!(entry["timestamp"].is_string());
    assert_eq!(entry["data"][0]["odds"]["draw"], 3.2);
    assert_eq!(entry["data"][0]["teams"], serde_json::json!(["A", "B"]));
}

#[test]
fn save_propagates_io_errors() {
    let dir = tmp_dir("io_err");
    // The target is an existing directory, so it can't be created as a file.
    let store = CacheStore::new(&dir);
    match store.save(&CacheMap::new()) {
        Err(StoreError::Io { path, .. }) => assert_eq!(path, dir),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn failed_write_reports_the_path() {
    let full = PathBuf::from("/dev/full");
    if !full.exists() {
        return;
    }
    let mut map = CacheMap::new();
    map.insert("abc".to_string(), sample_entry());
    match CacheStore::new(&full).save(&map) {
        Err(StoreError::Io { path, .. }) => assert_eq!(path, full),
        other => panic!("expected Io error, got {other:?}"),
    }
}
