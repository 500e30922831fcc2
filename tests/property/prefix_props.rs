//! Property tests for the prefix-tracking wrapper (spec §4.7), driven only
//! through the public façade surface (the wrapper's own constructor is
//! crate-private - façades are the only way to reach it from outside).

use levenshtrie::automaton::construct;
use levenshtrie::distance::Metric;
use levenshtrie::rune::{to_rune_vec, CaseSensitive};
use levenshtrie::LevenshtrieMap;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{0,6}").unwrap()
}

fn unique_keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key_strategy(), 0..10).prop_map(|mut keys| {
        keys.sort();
        keys.dedup();
        keys
    })
}

proptest! {
    /// Every stored key that has `prefix` as a literal prefix is reported by
    /// `prefix_search`, and every reported key genuinely has it as a prefix.
    #[test]
    fn prefix_search_matches_exactly_the_keys_with_that_prefix(
        keys in unique_keys_strategy(),
        prefix in key_strategy(),
    ) {
        let mut map: LevenshtrieMap<String> = LevenshtrieMap::new();
        for key in &keys {
            map.set(key, key.clone());
        }

        let runes = to_rune_vec(&prefix);
        let state = construct::<CaseSensitive>(&runes, 0, Metric::Levenshtein).unwrap();
        let mut got: Vec<String> = map.prefix_search(state).into_iter().map(|r| r.value.clone()).collect();
        got.sort();

        let mut want: Vec<String> = keys.into_iter().filter(|k| k.starts_with(&prefix)).collect();
        want.sort();

        prop_assert_eq!(got, want);
    }

    /// Prefix search is idempotent: running it twice over an unmodified map
    /// reports the same set.
    #[test]
    fn prefix_search_is_deterministic(keys in unique_keys_strategy(), prefix in key_strategy()) {
        let mut map: LevenshtrieMap<String> = LevenshtrieMap::new();
        for key in &keys {
            map.set(key, key.clone());
        }
        let runes = to_rune_vec(&prefix);

        let state_a = construct::<CaseSensitive>(&runes, 0, Metric::Levenshtein).unwrap();
        let mut first: Vec<String> = map.prefix_search(state_a).into_iter().map(|r| r.value.clone()).collect();
        first.sort();

        let state_b = construct::<CaseSensitive>(&runes, 0, Metric::Levenshtein).unwrap();
        let mut second: Vec<String> = map.prefix_search(state_b).into_iter().map(|r| r.value.clone()).collect();
        second.sort();

        prop_assert_eq!(first, second);
    }
}
