// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The abstract contract every automaton state satisfies (spec §4.3).

use crate::rune::Rune;

/// The execution state of a Levenshtein automaton mid-traversal.
///
/// Implementations are value types: copy-cheap (O(1) for the small-k and
/// template paths, O(k) for the bitparallel path, since it carries `k+1`
/// machine words per row) and carrying no heap allocation, so a tight search
/// loop can thread a state through thousands of `step` calls with no
/// allocator traffic.
///
/// Generic call sites (e.g. [`crate::trie::Trie::search`]) take `S: ExecutionState`
/// directly so the compiler monomorphizes the loop; [`crate::automaton::BoxedState`]
/// exists only as a non-monomorphized interop shim for callers that need to
/// hold automatons of differing concrete types in one collection.
pub trait ExecutionState: Copy {
    /// Produce the successor state after consuming scalar `c`, or `None` if
    /// this state has died (no path from here can still reach acceptance).
    ///
    /// After `step` returns `None`, the state the call was made on must not
    /// be stepped again; callers that need to keep exploring descendants
    /// after death (e.g. the prefix tracker, see [`PrefixState`]) wrap this
    /// type rather than relying on any particular behavior post-mortem.
    ///
    /// [`PrefixState`]: crate::automaton::PrefixState
    fn step(&self, c: Rune) -> Option<Self>;

    /// Whether the scalars consumed so far are within the configured edit
    /// distance of the pattern.
    fn is_final(&self) -> bool;

    /// The edit distance from the pattern to the scalars consumed so far.
    /// Only meaningful when [`Self::is_final`] is `true`.
    fn distance(&self) -> Option<u32>;

    /// `Some((matched_prefix_len, unmatched_suffix_len))` for states that
    /// track a prefix match (see [`PrefixState`]); `None` for every other
    /// matcher.
    ///
    /// [`PrefixState`]: crate::automaton::PrefixState
    fn prefix_metadata(&self) -> Option<(usize, usize)> {
        None
    }
}
