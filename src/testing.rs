// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It
//! provides canonical fixtures so unit tests, property tests, and
//! integration tests build the same handful of dictionaries the same way.

#![doc(hidden)]

use crate::trie::LevenshtrieMap;

/// The dictionary used throughout the crate's fuzzy-search examples and
/// tests: each word maps to itself, so a result's value doubles as its key.
pub const FOOD_DICTIONARY: &[&str] =
    &["f", "food", "good", "mood", "flood", "fod", "fob", "foodie"];

/// Build a case-sensitive map from `words`, each mapped to its own index.
pub fn build_indexed_map(words: &[&str]) -> LevenshtrieMap<usize> {
    let mut m = LevenshtrieMap::new();
    for (i, w) in words.iter().enumerate() {
        m.set(w, i);
    }
    m
}

/// Build a case-sensitive map from each word in `words` to itself.
pub fn build_self_map(words: &[&str]) -> LevenshtrieMap<String> {
    let mut m = LevenshtrieMap::new();
    for w in words {
        m.set(w, (*w).to_string());
    }
    m
}

/// A single ASCII scalar repeated `n` times, as a key of known length without
/// any branch points - used to exercise the "no stack overflow on a long
/// chain" guarantee.
pub fn long_chain_key(n: usize) -> String {
    "a".repeat(n)
}
