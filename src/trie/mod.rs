// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The radix-compressed trie core (spec §4.8): arena-allocated entries over
//! Unicode scalars, driven by any [`crate::automaton::ExecutionState`] to
//! answer exact, fuzzy, and prefix queries in one traversal.
//!
//! # Layout
//!
//! Three arenas, all plain `Vec`s indexed by [`NodeIndex`] - never pointers,
//! so the whole trie is trivially relocatable and has no lifetimes of its
//! own:
//!
//! - `entries`: one [`Entry`] per trie node. Entry 0 is the root; it carries
//!   [`crate::rune::ROOT_RUNE`] as a sentinel head that is never matched
//!   against input.
//! - `tail_data`: the shared character buffer backing every entry's
//!   radix-compressed edge label beyond its single head scalar.
//! - `results`: one slot per stored value, threaded into per-key singly
//!   linked lists for multi/set tries and recycled through a free list
//!   (`free_result_head`) on removal.
//!
//! Search (`search`/`enumerate_search`) is implemented once, as a fully
//! iterative traversal with an explicit `(NodeIndex, S)` stack - there is no
//! recursive call anywhere in the traversal, so the "recurse up to a fixed
//! depth, then fall back to an explicit stack" strategy collapses into
//! always using the explicit stack. This sidesteps picking a depth
//! threshold entirely and gives the long-chain case (spec §8, a 9999-deep
//! single-child chain) the same flat stack usage as a shallow trie.

mod entry;
mod map;
mod multimap;
mod results;
mod search;
mod set;

pub use map::LevenshtrieMap;
pub use multimap::LevenshtrieMultiMap;
pub use search::{MatchKind, SearchIter, SearchResult};
pub use set::LevenshtrieSet;

use std::marker::PhantomData;

use entry::Entry;
use results::ResultSlot;

use crate::contracts;
use crate::rune::{CasePolicy, Rune, ROOT_RUNE};

/// Index into one of the trie's arenas. `NO_INDEX` marks "no such node" /
/// "end of chain".
pub type NodeIndex = u32;

/// Sentinel "no index" value, used for absent children, absent tails,
/// absent results, and chain terminators alike.
pub const NO_INDEX: NodeIndex = u32::MAX;

/// The root's fixed arena slot.
const ROOT: NodeIndex = 0;

const INITIAL_ARENA_CAPACITY: usize = 16;

/// The radix-compressed trie core shared by every façade
/// ([`LevenshtrieMap`], [`LevenshtrieMultiMap`], [`LevenshtrieSet`]).
///
/// `C` is the case-sensitivity policy the trie was built with; it governs
/// every scalar comparison performed during navigation. Search accepts any
/// [`crate::automaton::ExecutionState`], not only ones built with this same
/// `C` - driving a trie with an automaton built under a mismatched policy
/// compiles but produces meaningless results (the two never compare a
/// scalar against each other directly, so there is no type-level seam to
/// reject it at; see [`crate::error::TrieError::CaseSensitivityMismatch`]
/// for the error a caller can choose to raise if they track this
/// themselves).
pub struct Trie<T, C: CasePolicy> {
    entries: Vec<Entry>,
    tail_data: Vec<Rune>,
    results: Vec<ResultSlot<T>>,
    free_result_head: NodeIndex,
    _policy: PhantomData<C>,
}

impl<T, C: CasePolicy> Default for Trie<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: CasePolicy> Trie<T, C> {
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(INITIAL_ARENA_CAPACITY);
        entries.push(Entry {
            head: ROOT_RUNE,
            tail_start: NO_INDEX,
            tail_len: 0,
            first_child: NO_INDEX,
            next_sibling: NO_INDEX,
            result_index: NO_INDEX,
        });
        Trie {
            entries,
            tail_data: Vec::new(),
            results: Vec::with_capacity(INITIAL_ARENA_CAPACITY),
            free_result_head: NO_INDEX,
            _policy: PhantomData,
        }
    }

    fn tail_of(&self, entry: &Entry) -> &[Rune] {
        if entry.tail_len == 0 {
            &[]
        } else {
            let start = entry.tail_start as usize;
            &self.tail_data[start..start + entry.tail_len as usize]
        }
    }

    fn push_entry(&mut self, entry: Entry) -> NodeIndex {
        let idx = self.entries.len() as NodeIndex;
        self.entries.push(entry);
        idx
    }

    fn append_tail(&mut self, scalars: &[Rune]) -> (NodeIndex, u32) {
        if scalars.is_empty() {
            return (NO_INDEX, 0);
        }
        let start = self.tail_data.len() as NodeIndex;
        self.tail_data.extend_from_slice(scalars);
        (start, scalars.len() as u32)
    }

    fn find_child(&self, parent: NodeIndex, head: Rune) -> Option<NodeIndex> {
        let mut cur = self.entries[parent as usize].first_child;
        let mut hops = 0usize;
        while cur != NO_INDEX {
            if C::eq(self.entries[cur as usize].head, head) {
                return Some(cur);
            }
            cur = self.entries[cur as usize].next_sibling;
            hops += 1;
            debug_assert!(hops <= self.entries.len(), "sibling chain did not terminate");
        }
        None
    }

    /// Navigate to the terminal entry for `key`, or `None` if absent.
    fn navigate(&self, key: &[Rune]) -> Option<NodeIndex> {
        let mut node = ROOT;
        let mut i = 0usize;
        while i < key.len() {
            let child = self.find_child(node, key[i])?;
            let tail = self.tail_of(&self.entries[child as usize]);
            for (j, &tc) in tail.iter().enumerate() {
                let key_idx = i + 1 + j;
                if key_idx >= key.len() || !C::eq(tc, key[key_idx]) {
                    return None;
                }
            }
            i += 1 + tail.len();
            node = child;
        }
        Some(node)
    }

    /// Navigate to `key`'s terminal entry, inserting branch points as
    /// needed (spec §4.8 "Branching"). Always succeeds.
    fn get_or_add_entry(&mut self, key: &[Rune]) -> NodeIndex {
        let mut node = ROOT;
        let mut i = 0usize;
        while i < key.len() {
            match self.find_child(node, key[i]) {
                None => {
                    let (start, len) = self.append_tail(&key[i + 1..]);
                    let new_idx = self.push_entry(Entry {
                        head: key[i],
                        tail_start: start,
                        tail_len: len,
                        first_child: NO_INDEX,
                        next_sibling: self.entries[node as usize].first_child,
                        result_index: NO_INDEX,
                    });
                    self.entries[node as usize].first_child = new_idx;
                    return new_idx;
                }
                Some(child) => {
                    let tail = self.tail_of(&self.entries[child as usize]).to_vec();
                    let mut j = 0usize;
                    while j < tail.len() && i + 1 + j < key.len() && C::eq(tail[j], key[i + 1 + j]) {
                        j += 1;
                    }
                    if j == tail.len() {
                        i += 1 + j;
                        node = child;
                        if i == key.len() {
                            return node;
                        }
                        continue;
                    }

                    let split = self.split_entry(child, j);
                    i += 1 + j;
                    if i == key.len() {
                        return split;
                    }
                    let (start, len) = self.append_tail(&key[i + 1..]);
                    let new_idx = self.push_entry(Entry {
                        head: key[i],
                        tail_start: start,
                        tail_len: len,
                        first_child: NO_INDEX,
                        next_sibling: self.entries[split as usize].first_child,
                        result_index: NO_INDEX,
                    });
                    self.entries[split as usize].first_child = new_idx;
                    return new_idx;
                }
            }
        }
        // Empty key: the root itself is the terminal entry.
        node
    }

    /// Split `entry` at tail offset `offset`: a new grandchild inherits the
    /// suffix beyond the split, and `entry` is truncated in place.
    fn split_entry(&mut self, entry_idx: NodeIndex, offset: usize) -> NodeIndex {
        let old_tail_start = self.entries[entry_idx as usize].tail_start;
        let old_tail_len = self.entries[entry_idx as usize].tail_len as usize;
        let old_first_child = self.entries[entry_idx as usize].first_child;
        let old_result = self.entries[entry_idx as usize].result_index;

        let split_head = self.tail_data[old_tail_start as usize + offset];
        let grand_tail_len = old_tail_len - offset - 1;
        let grand_tail_start = if grand_tail_len == 0 {
            NO_INDEX
        } else {
            (old_tail_start as usize + offset + 1) as NodeIndex
        };

        let grandchild = self.push_entry(Entry {
            head: split_head,
            tail_start: grand_tail_start,
            tail_len: grand_tail_len as u32,
            first_child: old_first_child,
            next_sibling: NO_INDEX,
            result_index: old_result,
        });

        let entry = &mut self.entries[entry_idx as usize];
        entry.tail_len = offset as u32;
        entry.tail_start = if offset == 0 { NO_INDEX } else { old_tail_start };
        entry.first_child = grandchild;
        entry.result_index = NO_INDEX;

        contracts::check_tail_consistent(entry.tail_start, entry.tail_len);
        contracts::check_entry_in_bounds(grandchild, self.entries.len());
        entry_idx
    }

    fn alloc_result(&mut self, value: T) -> NodeIndex {
        if self.free_result_head != NO_INDEX {
            let idx = self.free_result_head;
            self.free_result_head = self.results[idx as usize].next;
            self.results[idx as usize] = ResultSlot {
                value: Some(value),
                next: NO_INDEX,
            };
            idx
        } else {
            let idx = self.results.len() as NodeIndex;
            self.results.push(ResultSlot {
                value: Some(value),
                next: NO_INDEX,
            });
            idx
        }
    }

    fn free_result(&mut self, idx: NodeIndex) {
        self.results[idx as usize].value = None;
        self.results[idx as usize].next = self.free_result_head;
        self.free_result_head = idx;
    }

    /// Append a freshly allocated value to `entry`'s result list (at the
    /// tail), so iteration order matches insertion order (spec §5
    /// "Ordering": "iteration order equals insertion order minus
    /// removals"). Returns the new slot's index.
    fn append_result(&mut self, entry_idx: NodeIndex, value: T) -> NodeIndex {
        let new_idx = self.alloc_result(value);
        let head = self.entries[entry_idx as usize].result_index;
        if head == NO_INDEX {
            self.entries[entry_idx as usize].result_index = new_idx;
        } else {
            let mut cur = head;
            let mut hops = 0usize;
            while self.results[cur as usize].next != NO_INDEX {
                cur = self.results[cur as usize].next;
                hops += 1;
                debug_assert!(hops <= self.results.len(), "result chain did not terminate");
            }
            self.results[cur as usize].next = new_idx;
        }
        contracts::check_entry_in_bounds(head, self.results.len());
        new_idx
    }

    pub fn contains_key(&self, key: &[Rune]) -> bool {
        self.navigate(key)
            .is_some_and(|idx| self.entries[idx as usize].result_index != NO_INDEX)
    }

    pub fn try_get_value(&self, key: &[Rune]) -> Option<&T> {
        self.get_values(key).next()
    }

    pub fn get_values(&self, key: &[Rune]) -> ValuesCursor<'_, T, C> {
        let head = self
            .navigate(key)
            .map(|idx| self.entries[idx as usize].result_index)
            .unwrap_or(NO_INDEX);
        ValuesCursor { trie: self, next: head }
    }

    /// Remove every value stored at `key`. Returns whether anything was
    /// removed.
    pub fn remove_all(&mut self, key: &[Rune]) -> bool {
        let Some(idx) = self.navigate(key) else {
            return false;
        };
        let head = self.entries[idx as usize].result_index;
        if head == NO_INDEX {
            return false;
        }
        let mut cur = head;
        let mut hops = 0usize;
        while cur != NO_INDEX {
            let next = self.results[cur as usize].next;
            self.free_result(cur);
            cur = next;
            hops += 1;
            debug_assert!(hops <= self.results.len(), "result chain did not terminate");
        }
        self.entries[idx as usize].result_index = NO_INDEX;
        true
    }

    /// Remove every value under `key` equal to `value` per `eq`. Returns
    /// whether anything was removed.
    pub fn remove_value<F: Fn(&T, &T) -> bool>(&mut self, key: &[Rune], value: &T, eq: F) -> bool {
        let Some(idx) = self.navigate(key) else {
            return false;
        };
        let mut removed = false;
        let mut prev: Option<NodeIndex> = None;
        let mut cur = self.entries[idx as usize].result_index;
        while cur != NO_INDEX {
            let next = self.results[cur as usize].next;
            let matches = self.results[cur as usize]
                .value
                .as_ref()
                .is_some_and(|v| eq(v, value));
            if matches {
                match prev {
                    Some(p) => self.results[p as usize].next = next,
                    None => self.entries[idx as usize].result_index = next,
                }
                self.free_result(cur);
                removed = true;
            } else {
                prev = Some(cur);
            }
            cur = next;
        }
        removed
    }

    /// Rebuild the trie from a depth-first traversal into fresh arenas,
    /// reclaiming every byte of tail-data and result-slot garbage left by
    /// prior splits and removals (spec §9 "Tail data garbage").
    pub fn optimize(&mut self) {
        let old_entries = std::mem::take(&mut self.entries);
        let old_tail = std::mem::take(&mut self.tail_data);
        let mut old_results = std::mem::take(&mut self.results);
        *self = Self::new();

        // (key, result-slot indices in head-to-tail list order)
        let mut collected: Vec<(Vec<Rune>, Vec<NodeIndex>)> = Vec::new();

        let chain_of = |results: &[ResultSlot<T>], mut head: NodeIndex| -> Vec<NodeIndex> {
            let mut chain = Vec::new();
            while head != NO_INDEX {
                chain.push(head);
                head = results[head as usize].next;
            }
            chain
        };

        if old_entries[ROOT as usize].result_index != NO_INDEX {
            collected.push((
                Vec::new(),
                chain_of(&old_results, old_entries[ROOT as usize].result_index),
            ));
        }

        let mut stack: Vec<(NodeIndex, Vec<Rune>)> = Vec::new();
        let mut child = old_entries[ROOT as usize].first_child;
        while child != NO_INDEX {
            stack.push((child, Vec::new()));
            child = old_entries[child as usize].next_sibling;
        }

        while let Some((idx, mut prefix)) = stack.pop() {
            let e = &old_entries[idx as usize];
            prefix.push(e.head);
            if e.tail_len > 0 {
                let start = e.tail_start as usize;
                prefix.extend_from_slice(&old_tail[start..start + e.tail_len as usize]);
            }
            if e.result_index != NO_INDEX {
                collected.push((prefix.clone(), chain_of(&old_results, e.result_index)));
            }
            let mut sib = e.first_child;
            while sib != NO_INDEX {
                stack.push((sib, prefix.clone()));
                sib = old_entries[sib as usize].next_sibling;
            }
        }

        for (key, chain) in collected {
            let entry_idx = self.get_or_add_entry(&key);
            // `chain_of` walks the old list head-to-tail, which is already
            // insertion order (append_result keeps it that way); appending
            // in that same order preserves it in the rebuilt trie.
            for &old_idx in chain.iter() {
                let value = old_results[old_idx as usize]
                    .value
                    .take()
                    .expect("collected result slot must hold a value");
                self.append_result(entry_idx, value);
            }
        }
    }
}

/// Iterator over the values stored at one key.
pub struct ValuesCursor<'t, T, C: CasePolicy> {
    trie: &'t Trie<T, C>,
    next: NodeIndex,
}

impl<'t, T, C: CasePolicy> Iterator for ValuesCursor<'t, T, C> {
    type Item = &'t T;

    fn next(&mut self) -> Option<&'t T> {
        if self.next == NO_INDEX {
            return None;
        }
        let idx = self.next;
        let slot = &self.trie.results[idx as usize];
        self.next = slot.next;
        Some(slot.value.as_ref().expect("live result slot must hold a value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rune::{to_rune_vec, CaseSensitive};

    fn trie() -> Trie<i32, CaseSensitive> {
        Trie::new()
    }

    #[test]
    fn empty_trie_has_no_keys() {
        let t = trie();
        assert!(!t.contains_key(&to_rune_vec("food")));
    }

    #[test]
    fn insert_and_lookup_round_trip() {
        let mut t = trie();
        let entry = t.get_or_add_entry(&to_rune_vec("food"));
        t.append_result(entry, 42);
        assert!(t.contains_key(&to_rune_vec("food")));
        assert_eq!(t.try_get_value(&to_rune_vec("food")), Some(&42));
        assert!(!t.contains_key(&to_rune_vec("foo")));
        assert!(!t.contains_key(&to_rune_vec("foods")));
    }

    #[test]
    fn shared_prefix_creates_a_branch() {
        let mut t = trie();
        let e1 = t.get_or_add_entry(&to_rune_vec("food"));
        t.append_result(e1, 1);
        let e2 = t.get_or_add_entry(&to_rune_vec("foot"));
        t.append_result(e2, 2);
        assert_eq!(t.try_get_value(&to_rune_vec("food")), Some(&1));
        assert_eq!(t.try_get_value(&to_rune_vec("foot")), Some(&2));
        assert!(!t.contains_key(&to_rune_vec("foo")));
    }

    #[test]
    fn prefix_key_of_existing_key() {
        let mut t = trie();
        let e1 = t.get_or_add_entry(&to_rune_vec("food"));
        t.append_result(e1, 1);
        let e2 = t.get_or_add_entry(&to_rune_vec("foo"));
        t.append_result(e2, 2);
        assert_eq!(t.try_get_value(&to_rune_vec("food")), Some(&1));
        assert_eq!(t.try_get_value(&to_rune_vec("foo")), Some(&2));
    }

    #[test]
    fn empty_string_key() {
        let mut t = trie();
        let e = t.get_or_add_entry(&to_rune_vec(""));
        t.append_result(e, 99);
        assert_eq!(t.try_get_value(&to_rune_vec("")), Some(&99));
    }

    #[test]
    fn remove_all_clears_values() {
        let mut t = trie();
        let e = t.get_or_add_entry(&to_rune_vec("food"));
        t.append_result(e, 1);
        assert!(t.remove_all(&to_rune_vec("food")));
        assert!(!t.contains_key(&to_rune_vec("food")));
        assert!(!t.remove_all(&to_rune_vec("food")));
    }

    #[test]
    fn remove_value_removes_only_matching() {
        let mut t = trie();
        let e = t.get_or_add_entry(&to_rune_vec("food"));
        t.append_result(e, 1);
        t.append_result(e, 2);
        t.append_result(e, 1);
        assert!(t.remove_value(&to_rune_vec("food"), &1, |a, b| a == b));
        let remaining: Vec<i32> = t.get_values(&to_rune_vec("food")).copied().collect();
        assert_eq!(remaining, vec![2]);
    }

    #[test]
    fn optimize_preserves_contents_and_order() {
        let mut t = trie();
        let e1 = t.get_or_add_entry(&to_rune_vec("food"));
        t.append_result(e1, 1);
        t.append_result(e1, 2);
        let e2 = t.get_or_add_entry(&to_rune_vec("foot"));
        t.append_result(e2, 3);
        t.remove_all(&to_rune_vec("foot"));
        let e3 = t.get_or_add_entry(&to_rune_vec(""));
        t.append_result(e3, 0);

        let before: Vec<i32> = t.get_values(&to_rune_vec("food")).copied().collect();
        t.optimize();
        let after: Vec<i32> = t.get_values(&to_rune_vec("food")).copied().collect();
        assert_eq!(before, after);
        assert!(!t.contains_key(&to_rune_vec("foot")));
        assert_eq!(t.try_get_value(&to_rune_vec("")), Some(&0));
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let mut t = trie();
        let key = to_rune_vec(&"a".repeat(9999));
        let e = t.get_or_add_entry(&key);
        t.append_result(e, 1);
        assert_eq!(t.try_get_value(&key), Some(&1));
    }

    #[test]
    fn supplementary_plane_scalar_key() {
        let mut t = trie();
        let key = to_rune_vec("f\u{1F970}");
        let e = t.get_or_add_entry(&key);
        t.append_result(e, 7);
        assert_eq!(t.try_get_value(&key), Some(&7));
    }
}
