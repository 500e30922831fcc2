//! Shared test utilities and fixtures.

#![allow(dead_code)]

use levenshtrie::rune::CaseSensitive;
use levenshtrie::{automaton, distance::Metric, LevenshtrieMap};

/// The dictionary exercised throughout the crate's documented examples.
pub const FOOD_DICTIONARY: &[&str] = levenshtrie::testing::FOOD_DICTIONARY;

/// Build a map from each word in `words` to itself.
pub fn build_self_map(words: &[&str]) -> LevenshtrieMap<String> {
    levenshtrie::testing::build_self_map(words)
}

/// Search `map` for `pattern` within `k` edits under `metric`, returning the
/// matched keys, sorted and deduplicated.
pub fn search_words(
    map: &LevenshtrieMap<String>,
    pattern: &str,
    k: u32,
    metric: Metric,
) -> Vec<String> {
    let runes = levenshtrie::rune::to_rune_vec(pattern);
    let state = automaton::construct::<CaseSensitive>(&runes, k, metric).unwrap();
    let mut got: Vec<String> = map.search(state).into_iter().map(|r| r.value.clone()).collect();
    got.sort();
    got.dedup();
    got
}
