// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-map façade (spec §4.9): each key maps to an ordered list of values,
//! duplicates allowed.

use super::{CasePolicy, SearchIter, SearchResult, Trie, ValuesCursor};
use crate::automaton::{ExecutionState, PrefixState};
use crate::rune::{to_rune_vec, CaseSensitive};

/// A trie-backed multi-map: each key holds an ordered list of values, kept
/// in insertion order.
pub struct LevenshtrieMultiMap<T, C: CasePolicy = CaseSensitive> {
    trie: Trie<T, C>,
}

impl<T, C: CasePolicy> LevenshtrieMultiMap<T, C> {
    pub fn new() -> Self {
        LevenshtrieMultiMap { trie: Trie::new() }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.add(key.as_ref(), value);
        }
        map
    }

    /// Add `value` under `key`, without disturbing any existing values.
    pub fn add(&mut self, key: &str, value: T) {
        let runes = to_rune_vec(key);
        let entry = self.trie.get_or_add_entry(&runes);
        self.trie.append_result(entry, value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.trie.contains_key(&to_rune_vec(key))
    }

    pub fn values(&self, key: &str) -> ValuesCursor<'_, T, C> {
        self.trie.get_values(&to_rune_vec(key))
    }

    /// Remove every value under `key` matching `value` under `eq`.
    pub fn remove<F: Fn(&T, &T) -> bool>(&mut self, key: &str, value: &T, eq: F) -> bool {
        self.trie.remove_value(&to_rune_vec(key), value, eq)
    }

    /// Remove every value under `key`.
    pub fn remove_all(&mut self, key: &str) -> bool {
        self.trie.remove_all(&to_rune_vec(key))
    }

    pub fn search<S: ExecutionState>(&self, state: S) -> Vec<SearchResult<'_, T>> {
        self.trie.search(state)
    }

    pub fn enumerate_search<S: ExecutionState>(&self, state: S) -> SearchIter<'_, T, C, S> {
        self.trie.enumerate_search(state)
    }

    pub fn prefix_search<S: ExecutionState>(&self, state: S) -> Vec<SearchResult<'_, T>> {
        self.trie.prefix_search(state)
    }

    pub fn enumerate_prefix_search<S: ExecutionState>(
        &self,
        state: S,
    ) -> SearchIter<'_, T, C, PrefixState<S>> {
        self.trie.enumerate_prefix_search(state)
    }

    pub fn optimize(&mut self) {
        self.trie.optimize();
    }
}

impl<T, C: CasePolicy> Default for LevenshtrieMultiMap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_under_one_key_are_kept_in_insertion_order() {
        let mut m: LevenshtrieMultiMap<i32> = LevenshtrieMultiMap::new();
        m.add("food", 1);
        m.add("food", 2);
        m.add("food", 3);
        let got: Vec<i32> = m.values("food").copied().collect();
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn remove_by_value_removes_every_match() {
        let mut m: LevenshtrieMultiMap<i32> = LevenshtrieMultiMap::new();
        m.add("food", 1);
        m.add("food", 2);
        m.add("food", 1);
        assert!(m.remove("food", &1, |a, b| a == b));
        let got: Vec<i32> = m.values("food").copied().collect();
        assert_eq!(got, vec![2]);
    }

    #[test]
    fn remove_all_clears_the_key() {
        let mut m: LevenshtrieMultiMap<i32> = LevenshtrieMultiMap::new();
        m.add("food", 1);
        m.add("food", 2);
        assert!(m.remove_all("food"));
        assert!(!m.contains_key("food"));
    }
}
