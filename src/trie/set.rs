// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String-set façade (spec §4.9): each key maps to a deduplicated set of
//! values, compared by a configurable equality.

use super::{CasePolicy, SearchIter, SearchResult, Trie, ValuesCursor, NO_INDEX};
use crate::automaton::{ExecutionState, PrefixState};
use crate::rune::{to_rune_vec, CaseSensitive};

/// A trie-backed set: each key holds a deduplicated collection of values,
/// compared with a configurable equality rather than always `PartialEq`
/// (spec §4.8 "Multi/set semantics" - "consulting the configured equality
/// comparer").
pub struct LevenshtrieSet<T, C: CasePolicy = CaseSensitive> {
    trie: Trie<T, C>,
    eq: fn(&T, &T) -> bool,
}

impl<T: PartialEq, C: CasePolicy> LevenshtrieSet<T, C> {
    pub fn new() -> Self {
        Self::with_comparer(PartialEq::eq)
    }
}

impl<T, C: CasePolicy> LevenshtrieSet<T, C> {
    /// Build a set using `eq` rather than [`PartialEq`] to decide whether an
    /// inserted value already exists under a key.
    pub fn with_comparer(eq: fn(&T, &T) -> bool) -> Self {
        LevenshtrieSet {
            trie: Trie::new(),
            eq,
        }
    }

    /// Insert `value` under `key`. Returns `true` if this was a new value
    /// under that key, `false` if an equal value was already present.
    pub fn insert(&mut self, key: &str, value: T) -> bool {
        let runes = to_rune_vec(key);
        let entry = self.trie.get_or_add_entry(&runes);
        let mut cur = self.trie.entries[entry as usize].result_index;
        while cur != NO_INDEX {
            let slot = &self.trie.results[cur as usize];
            if slot.value.as_ref().is_some_and(|v| (self.eq)(v, &value)) {
                return false;
            }
            cur = slot.next;
        }
        self.trie.append_result(entry, value);
        true
    }

    pub fn contains(&self, key: &str, value: &T) -> bool {
        self.values(key).any(|v| (self.eq)(v, value))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.trie.contains_key(&to_rune_vec(key))
    }

    pub fn values(&self, key: &str) -> ValuesCursor<'_, T, C> {
        self.trie.get_values(&to_rune_vec(key))
    }

    pub fn remove(&mut self, key: &str, value: &T) -> bool {
        self.trie.remove_value(&to_rune_vec(key), value, self.eq)
    }

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

impl<T: PartialEq, C: CasePolicy> Default for LevenshtrieSet<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
