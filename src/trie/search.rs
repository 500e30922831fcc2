// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Automaton-driven search (spec §4.8 "Recursive search" / "Lazy search").
//!
//! Both entry points share one traversal, implemented here with an explicit
//! `(NodeIndex, S)` stack rather than recursion. Spec's prose frames this as
//! "recurse up to a fixed depth, then fall back to an explicit stack for the
//! rest" as a defense against deep chains; using the explicit-stack form
//! throughout sidesteps choosing that depth altogether; a 9999-scalar chain
//! costs the same stack depth (one stack frame, `O(1)`) as a two-entry trie.

use super::{CasePolicy, Entry, NodeIndex, Trie, NO_INDEX, ROOT};
use crate::automaton::{ExecutionState, PrefixState};

/// Whether a result came from a plain bounded-distance match or from a
/// prefix-tracking traversal that kept matching past the pattern's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Full,
    Prefix,
}

/// One emitted match.
pub struct SearchResult<'t, T> {
    pub value: &'t T,
    pub distance: u32,
    pub kind: MatchKind,
    pub prefix_metadata: Option<(usize, usize)>,
}

/// Lazy, pull-based traversal. Each [`Iterator::next`] call does the minimum
/// work needed to produce (or rule out) one more result.
pub struct SearchIter<'t, T, C: CasePolicy, S: ExecutionState> {
    trie: &'t Trie<T, C>,
    stack: Vec<(NodeIndex, S)>,
    cursor: NodeIndex,
    cursor_distance: u32,
    cursor_prefix_metadata: Option<(usize, usize)>,
}

impl<'t, T, C: CasePolicy, S: ExecutionState> SearchIter<'t, T, C, S> {
    fn new(trie: &'t Trie<T, C>, start: S) -> Self {
        let mut stack = Vec::new();
        push_children(trie, &mut stack, ROOT, start.clone());

        // The root itself carries the empty-string key's value, if any; it has
        // no incoming edge to step through, so its match has to be checked
        // against the un-stepped start state directly, not discovered by the
        // traversal below.
        let root_result = trie.entries[ROOT as usize].result_index;
        let (cursor, cursor_distance, cursor_prefix_metadata) = if start.is_final() && root_result != NO_INDEX {
            (root_result, start.distance().unwrap_or(0), start.prefix_metadata())
        } else {
            (NO_INDEX, 0, None)
        };

        SearchIter {
            trie,
            stack,
            cursor,
            cursor_distance,
            cursor_prefix_metadata,
        }
    }
}

fn push_children<T, C: CasePolicy, S: ExecutionState>(
    trie: &Trie<T, C>,
    stack: &mut Vec<(NodeIndex, S)>,
    parent: NodeIndex,
    state: S,
) {
    let mut cur = trie.entries[parent as usize].first_child;
    while cur != NO_INDEX {
        stack.push((cur, state));
        cur = trie.entries[cur as usize].next_sibling;
    }
}

impl<'t, T, C: CasePolicy, S: ExecutionState> Iterator for SearchIter<'t, T, C, S> {
    type Item = SearchResult<'t, T>;

    fn next(&mut self) -> Option<SearchResult<'t, T>> {
        loop {
            if self.cursor != NO_INDEX {
                let slot = &self.trie.results[self.cursor as usize];
                let value = slot.value.as_ref().expect("live result slot must hold a value");
                self.cursor = slot.next;
                return Some(SearchResult {
                    value,
                    distance: self.cursor_distance,
                    kind: if self.cursor_prefix_metadata.is_some() {
                        MatchKind::Prefix
                    } else {
                        MatchKind::Full
                    },
                    prefix_metadata: self.cursor_prefix_metadata,
                });
            }

            let (entry_idx, state) = self.stack.pop()?;
            let entry: &Entry = &self.trie.entries[entry_idx as usize];
            let Some(mut s) = state.step(entry.head) else {
                continue;
            };
            let mut alive = true;
            for &c in self.trie.tail_of(entry) {
                match s.step(c) {
                    Some(next) => s = next,
                    None => {
                        alive = false;
                        break;
                    }
                }
            }
            if !alive {
                continue;
            }

            if s.is_final() && entry.result_index != NO_INDEX {
                self.cursor = entry.result_index;
                self.cursor_distance = s.distance().unwrap_or(0);
                self.cursor_prefix_metadata = s.prefix_metadata();
            }
            push_children(self.trie, &mut self.stack, entry_idx, s);
        }
    }
}

impl<T, C: CasePolicy> Trie<T, C> {
    /// Lazily enumerate every `(value, distance, kind)` match driven by
    /// `state` starting from the root.
    pub fn enumerate_search<S: ExecutionState>(&self, state: S) -> SearchIter<'_, T, C, S> {
        SearchIter::new(self, state)
    }

    /// Eagerly collect every match driven by `state`.
    pub fn search<S: ExecutionState>(&self, state: S) -> Vec<SearchResult<'_, T>> {
        self.enumerate_search(state).collect()
    }

    /// Like [`Self::enumerate_search`], but wraps `state` in the prefix
    /// tracker first, so matches continue to be reported for every
    /// descendant of an already-matched path (spec §4.7).
    pub fn enumerate_prefix_search<S: ExecutionState>(
        &self,
        state: S,
    ) -> SearchIter<'_, T, C, PrefixState<S>> {
        SearchIter::new(self, PrefixState::start(state))
    }

    /// Eagerly collect every prefix match driven by `state`.
    pub fn prefix_search<S: ExecutionState>(&self, state: S) -> Vec<SearchResult<'_, T>> {
        self.enumerate_prefix_search(state).collect()
    }
}
