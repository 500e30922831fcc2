// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode invariant checks for the trie arena.
//!
//! These are zero-cost in release builds (`debug_assert!`) and exist purely
//! to fail loudly, close to the bug, during development rather than as a
//! garbled panic three calls later. Every function here checks one of the
//! invariants listed in spec §3.
//!
//! # Invariants checked here
//!
//! - `ENTRY_IN_BOUNDS`: every entry index used by a node is `< entries.len()`.
//! - `TAIL_CONSISTENT`: `tail_len == 0 <=> tail_start == NO_INDEX`.
//! - `CHILD_LIST_TERMINATES` / `RESULT_LIST_TERMINATES`: sibling and result
//!   chains end in `NO_INDEX` within a bounded number of hops (bounded by
//!   the arena size - an unbounded walk here would defeat the point of a
//!   cheap debug check, so this only probes, it does not fully walk).

use crate::trie::{NO_INDEX, NodeIndex};

/// Check that `idx` is `NO_INDEX` or a valid entry index into an arena of
/// length `entries_len`.
#[inline]
pub(crate) fn check_entry_in_bounds(idx: NodeIndex, entries_len: usize) {
    debug_assert!(
        idx == NO_INDEX || (idx as usize) < entries_len,
        "contract violation: entry index {idx} is out of bounds for arena of length {entries_len}"
    );
}

/// Check that a node's tail-length/tail-start pair is internally consistent.
#[inline]
pub(crate) fn check_tail_consistent(tail_start: NodeIndex, tail_len: u32) {
    debug_assert!(
        (tail_len == 0) == (tail_start == NO_INDEX),
        "contract violation: tail_len={tail_len} but tail_start={tail_start} (expected NO_INDEX iff tail_len==0)"
    );
}

/// Check that a sibling/result/child chain does not exceed `max_hops` before
/// terminating in `NO_INDEX`. A violation here means a cycle was introduced
/// (which should be structurally impossible, since relationships are plain
/// arena indices assigned only during insertion) or the arena was corrupted.
#[inline]
pub(crate) fn check_chain_terminates<F>(mut cur: NodeIndex, max_hops: usize, mut next: F)
where
    F: FnMut(NodeIndex) -> NodeIndex,
{
    let mut hops = 0usize;
    while cur != NO_INDEX {
        hops += 1;
        debug_assert!(
            hops <= max_hops,
            "contract violation: chain did not terminate within {max_hops} hops (possible cycle)"
        );
        cur = next(cur);
    }
}
