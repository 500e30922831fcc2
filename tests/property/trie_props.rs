//! Property tests for the radix-trie core and its façades (spec §4.8-4.9).

use levenshtrie::rune::{CaseInsensitive, CaseSensitive};
use levenshtrie::{LevenshtrieMap, LevenshtrieMultiMap, LevenshtrieSet};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,6}").unwrap()
}

fn unique_keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key_strategy(), 0..12).prop_map(|mut keys| {
        keys.sort();
        keys.dedup();
        keys
    })
}

proptest! {
    #[test]
    fn every_inserted_key_is_found(keys in unique_keys_strategy()) {
        let mut map: LevenshtrieMap<usize> = LevenshtrieMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.add(key, i).unwrap();
        }
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(map.get(key), Some(&i));
        }
    }

    #[test]
    fn removed_key_is_absent_but_siblings_survive(keys in unique_keys_strategy()) {
        prop_assume!(!keys.is_empty());
        let mut map: LevenshtrieMap<usize> = LevenshtrieMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.add(key, i).unwrap();
        }
        let removed = &keys[0];
        map.remove(removed);
        prop_assert!(!map.contains_key(removed));
        for key in keys.iter().skip(1) {
            if key != removed {
                prop_assert!(map.contains_key(key));
            }
        }
    }

    #[test]
    fn optimize_does_not_change_what_is_found(keys in unique_keys_strategy()) {
        let mut map: LevenshtrieMap<usize> = LevenshtrieMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.add(key, i).unwrap();
        }
        let before: Vec<Option<usize>> = keys.iter().map(|k| map.get(k).copied()).collect();
        map.optimize();
        let after: Vec<Option<usize>> = keys.iter().map(|k| map.get(k).copied()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn case_insensitive_lookup_ignores_case(key in "[a-zA-Z]{1,8}") {
        let mut map: LevenshtrieMap<usize, CaseInsensitive> = LevenshtrieMap::new();
        map.add(&key, 1).unwrap();
        prop_assert_eq!(map.get(&key.to_lowercase()), Some(&1));
        prop_assert_eq!(map.get(&key.to_uppercase()), Some(&1));
    }

    #[test]
    fn case_sensitive_map_distinguishes_differently_cased_keys(key in "[a-z]{1,8}") {
        prop_assume!(key != key.to_uppercase());
        let mut map: LevenshtrieMap<usize, CaseSensitive> = LevenshtrieMap::new();
        map.add(&key, 1).unwrap();
        prop_assert!(!map.contains_key(&key.to_uppercase()));
    }

    #[test]
    fn multimap_preserves_every_value_under_a_key(
        key in key_strategy(),
        values in prop::collection::vec(0i32..100, 0..8),
    ) {
        let mut m: LevenshtrieMultiMap<i32> = LevenshtrieMultiMap::new();
        for &v in &values {
            m.add(&key, v);
        }
        let mut got: Vec<i32> = m.values(&key).copied().collect();
        let mut want = values.clone();
        got.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn set_insert_is_idempotent(
        key in key_strategy(),
        values in prop::collection::vec(0i32..20, 0..10),
    ) {
        let mut s: LevenshtrieSet<i32> = LevenshtrieSet::new();
        for &v in &values {
            s.insert(&key, v);
        }
        let mut got: Vec<i32> = s.values(&key).copied().collect();
        got.sort_unstable();
        got.dedup();
        let mut want = values;
        want.sort_unstable();
        want.dedup();
        prop_assert_eq!(got, want);
    }
}
