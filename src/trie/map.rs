// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-value map façade (spec §4.9): each key maps to at most one value.

use super::{CasePolicy, SearchIter, SearchResult, Trie, ValuesCursor, NO_INDEX};
use crate::automaton::{ExecutionState, PrefixState};
use crate::error::{Result, TrieError};
use crate::rune::{to_rune_vec, CaseSensitive};

/// A trie-backed map from string keys to a single value each.
///
/// `C` defaults to [`CaseSensitive`]; use `LevenshtrieMap<T, CaseInsensitive>`
/// for invariant-culture-lowercase key comparison.
pub struct LevenshtrieMap<T, C: CasePolicy = CaseSensitive> {
    trie: Trie<T, C>,
}

impl<T, C: CasePolicy> LevenshtrieMap<T, C> {
    pub fn new() -> Self {
        LevenshtrieMap { trie: Trie::new() }
    }

    /// Build a map from `(key, value)` pairs. Fails on the first duplicate
    /// key, per [`Self::add`].
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.add(key.as_ref(), value)?;
        }
        Ok(map)
    }

    /// Insert `value` at `key`. Fails if `key` already has a value.
    pub fn add(&mut self, key: &str, value: T) -> Result<()> {
        let runes = to_rune_vec(key);
        let entry = self.trie.get_or_add_entry(&runes);
        if self.trie.entries[entry as usize].result_index != NO_INDEX {
            return Err(TrieError::DuplicateKey { key: key.to_string() });
        }
        self.trie.append_result(entry, value);
        Ok(())
    }

    /// Insert or overwrite the value at `key`.
    pub fn set(&mut self, key: &str, value: T) {
        let runes = to_rune_vec(key);
        let entry = self.trie.get_or_add_entry(&runes);
        let existing = self.trie.entries[entry as usize].result_index;
        if existing != NO_INDEX {
            self.trie.results[existing as usize].value = Some(value);
        } else {
            self.trie.append_result(entry, value);
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.trie.remove_all(&to_rune_vec(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.trie.contains_key(&to_rune_vec(key))
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.trie.try_get_value(&to_rune_vec(key))
    }

    pub fn values(&self, key: &str) -> ValuesCursor<'_, T, C> {
        self.trie.get_values(&to_rune_vec(key))
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

impl<T, C: CasePolicy> Default for LevenshtrieMap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
