// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the library's fail-fast API boundary.
//!
//! Per spec §7: `Absent` outcomes (key/value not found) are never errors -
//! they are returned as `bool`/`Option` from the operation itself. `Fatal`
//! conditions (arena invariant violations, allocation failure) are bugs and
//! are not represented here either; they `panic!`/`debug_assert!` in
//! [`crate::contracts`] instead. This enum covers exactly the two kinds that
//! fail fast and are recoverable by the caller: a malformed request
//! (`InvalidArgument`) or a request for a configuration the library does not
//! implement (`UnsupportedConfiguration`).

use std::fmt;

/// Errors returned at the library's API boundary.
///
/// These are never produced mid-traversal; they are synchronous, fail-fast
/// rejections of a bad call (see spec §7 "Propagation policy").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A negative (not representable - the crate uses `u32`) or out-of-range
    /// edit-distance bound was requested.
    InvalidDistance { k: i64 },

    /// `add` was called on a single-value map with a key that already has a
    /// value. Carries the offending key so the caller can act without
    /// re-deriving it.
    DuplicateKey { key: String },

    /// Two automata/tries built with mismatched case-sensitivity policies
    /// were combined (e.g. a case-insensitive automaton driven over a
    /// case-sensitive trie's search entry point).
    CaseSensitivityMismatch,

    /// `k` exceeds the ceiling of the requested construction path: 3 for the
    /// cached-template factory, 30 for the bitparallel automaton.
    UnsupportedDistance { k: u32, ceiling: u32 },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::InvalidDistance { k } => {
                write!(f, "edit distance bound must be nonnegative, got {k}")
            }
            TrieError::DuplicateKey { key } => {
                write!(f, "key {key:?} already has a value in this map")
            }
            TrieError::CaseSensitivityMismatch => {
                write!(f, "automaton and trie were built with different case-sensitivity policies")
            }
            TrieError::UnsupportedDistance { k, ceiling } => {
                write!(f, "edit distance {k} exceeds the supported ceiling of {ceiling}")
            }
        }
    }
}

impl std::error::Error for TrieError {}

/// Convenience alias used throughout the crate's fallible constructors.
pub type Result<T> = std::result::Result<T, TrieError>;
