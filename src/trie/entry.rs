// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single trie node (spec §4.8 "Trie entry").

use super::NodeIndex;
use crate::rune::Rune;

/// One node in the trie's entry arena.
///
/// Relationships (`first_child`, `next_sibling`, `result_index`) are plain
/// arena indices, never pointers - the trie graph is a pure tree in index
/// space (spec §9 "Cyclic references: none").
#[derive(Debug, Clone, Copy)]
pub(super) struct Entry {
    /// The single scalar labeling the edge into this entry.
    pub head: Rune,
    /// Start of this entry's tail-data slice, or `NO_INDEX` iff `tail_len == 0`.
    pub tail_start: NodeIndex,
    /// Length of the radix-compressed suffix following `head`.
    pub tail_len: u32,
    pub first_child: NodeIndex,
    pub next_sibling: NodeIndex,
    /// Head of this entry's result list, or `NO_INDEX` if no value ends here.
    pub result_index: NodeIndex,
}
