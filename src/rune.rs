// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unicode scalar values and the case-sensitivity policy.
//!
//! Every edge, automaton transition, and comparison in this crate is keyed on
//! a [`Rune`] (a Unicode scalar value), never on a UTF-16 code unit or a
//! UTF-8 byte. Rust's `char` already *is* a Unicode scalar value, so unlike a
//! UTF-16 host there is no surrogate-decoding step and no possibility of an
//! unpaired surrogate reaching the trie: every `char` obtained from a `&str`
//! is valid by construction. `Rune` is kept as a distinct name (rather than
//! using `char` directly throughout) so the vocabulary matches the rest of
//! the crate and the sentinel below reads as intentional rather than magic.

/// A single Unicode scalar value.
pub type Rune = char;

/// The sentinel scalar that labels the trie's root edge.
///
/// The root never corresponds to any stored key, so this value is never
/// compared against input - it only needs to be a legal `Rune`, which
/// `char::REPLACEMENT_CHARACTER` is.
pub const ROOT_RUNE: Rune = '\u{FFFD}';

/// Case-sensitivity policy, selected at compile time so comparison loops
/// monomorphize instead of branching on a runtime flag.
pub trait CasePolicy: Copy + Clone + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Compare two scalars under this policy.
    fn eq(a: Rune, b: Rune) -> bool;

    /// Map a scalar through this policy's normalization (identity for
    /// case-sensitive, invariant-culture lowercase for case-insensitive).
    fn normalize(c: Rune) -> Rune;

    /// Whether this policy folds case at all. Used by callers that need to
    /// decide, e.g., whether two automata built with different policies may
    /// be mixed (they may not - see [`crate::error::TrieError::CaseSensitivityMismatch`]).
    const IGNORE_CASE: bool;
}

/// Scalars compare equal only if identical.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct CaseSensitive;

impl CasePolicy for CaseSensitive {
    #[inline]
    fn eq(a: Rune, b: Rune) -> bool {
        a == b
    }

    #[inline]
    fn normalize(c: Rune) -> Rune {
        c
    }

    const IGNORE_CASE: bool = false;
}

/// Scalars compare equal if they map to the same invariant-culture lowercase
/// scalar.
///
/// "Invariant-culture single-scalar lowercase" means: map each scalar to its
/// simple (not full, not locale-sensitive) lowercase form, taking only the
/// first scalar of the mapping when a `char`'s lowercase expansion would
/// otherwise produce more than one (e.g. Turkish dotted/dotless `I` is
/// deliberately *not* special-cased; German `ẞ`/`ß` are left as their own
/// simple mappings). This mirrors .NET's `ToLowerInvariant` single-scalar
/// behavior rather than full Unicode case folding, per spec §4.1.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct CaseInsensitive;

impl CasePolicy for CaseInsensitive {
    #[inline]
    fn eq(a: Rune, b: Rune) -> bool {
        Self::normalize(a) == Self::normalize(b)
    }

    #[inline]
    fn normalize(c: Rune) -> Rune {
        // `char::to_lowercase` can yield more than one scalar (e.g. some
        // Cherokee / Greek-with-accent mappings); the policy is defined as
        // "single-scalar", so only the first is taken. This is a deliberate,
        // documented simplification rather than full Unicode case folding.
        c.to_lowercase().next().unwrap_or(c)
    }

    const IGNORE_CASE: bool = true;
}

/// Iterate a string as Unicode scalar values.
///
/// This exists mostly as a named seam matching spec §4.1's "iterate as
/// scalars" operation; on a Rust `&str` it is exactly `str::chars`.
#[inline]
pub fn runes(s: &str) -> impl Iterator<Item = Rune> + Clone + '_ {
    s.chars()
}

/// Collect a string into its scalar sequence.
#[inline]
pub fn to_rune_vec(s: &str) -> Vec<Rune> {
    s.chars().collect()
}
