// src/core/fingerprint.rs
use sha2::{Digest, Sha256};

use crate::params::ParameterSet;

/// Cache key for a parameter set: hex SHA-256 of its sorted-key JSON form.
///
/// `ParameterSet` is `BTreeMap`-backed, so serialization is already canonical
/// and two sets holding the same pairs hash the same regardless of build order.
pub fn fingerprint(params: &ParameterSet) -> String {
    // A map of strings and numbers always serializes.
    let canonical = serde_json::to_string(params).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_length_lowercase_hex() {
        let fp = fingerprint(&ParameterSet::default_listing());
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn permutations_hash_equal() {
        let a = ParameterSet::from([("marketId", "1X2"), ("competitions", "1,2"), ("categoryId", "2")]);
        let b = ParameterSet::from([("categoryId", "2"), ("marketId", "1X2"), ("competitions", "1,2")]);
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn value_type_is_part_of_identity() {
        let text = ParameterSet::new().with("categoryId", "2");
        let num = ParameterSet::new().with("categoryId", 2i64);
        assert_ne!(fingerprint(&text), fingerprint(&num));
    }

    #[test]
    fn empty_set_is_stable() {
        assert_eq!(fingerprint(&ParameterSet::new()), fingerprint(&ParameterSet::default()));
    }
}
