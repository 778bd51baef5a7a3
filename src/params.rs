// src/params.rs
//! Query parameters for the events listing.
//!
//! A `ParameterSet` is keyed by a `BTreeMap`, so two sets built from the same
//! pairs in any order are equal and serialize identically. That is what lets
//! them double as cache keys (see `core::fingerprint`).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_CATEGORY_ID, DEFAULT_COMPETITIONS, DEFAULT_MARKET_ID};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self { ParamValue::Text(s!(v)) }
}
impl From<String> for ParamValue {
    fn from(v: String) -> Self { ParamValue::Text(v) }
}
impl From<i64> for ParamValue {
    fn from(v: i64) -> Self { ParamValue::Int(v) }
}
impl From<u32> for ParamValue {
    fn from(v: u32) -> Self { ParamValue::Int(i64::from(v)) }
}
impl From<f64> for ParamValue {
    fn from(v: f64) -> Self { ParamValue::Float(v) }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, ParamValue>);

impl ParameterSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The listing the app asks for by default: 1X2 market, football, fixed competitions.
    pub fn default_listing() -> Self {
        Self::new()
            .with("marketId", DEFAULT_MARKET_ID)
            .with("competitions", DEFAULT_COMPETITIONS)
            .with("categoryId", DEFAULT_CATEGORY_ID)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// `(key, value)` string pairs for the query string.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
