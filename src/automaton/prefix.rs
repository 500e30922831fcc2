// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix-tracking wrapper (spec §4.7): turns any whole-string matcher into
//! a "does some prefix of this path match" tracker, which is what prefix
//! search needs - a trie path that has already matched the pattern within
//! `k` edits should keep being walked into its descendants, since every
//! extension of an already-accepted key is itself a valid prefix-search hit.

use super::state::ExecutionState;
use crate::rune::Rune;

/// Wraps an inner [`ExecutionState`] and keeps succeeding once the inner
/// state has matched, so the caller can keep walking descendants of a
/// matched path without the inner automaton's death ending the traversal.
#[derive(Clone, Copy)]
pub struct PrefixState<S: ExecutionState> {
    inner: Option<S>,
    match_seen: bool,
    best_distance: u32,
    length_so_far: u32,
    /// Scalars consumed since the best match was recorded; reset to 0 when a
    /// better match is found, incremented on every step thereafter. `None`
    /// until the first match.
    suffix_length: Option<u32>,
}

impl<S: ExecutionState> PrefixState<S> {
    pub(crate) fn start(inner: S) -> Self {
        let mut state = PrefixState {
            inner: Some(inner),
            match_seen: false,
            best_distance: u32::MAX,
            length_so_far: 0,
            suffix_length: None,
        };
        state.observe();
        state
    }

    /// Update `match_seen`/`best_distance`/`suffix_length` from the current
    /// inner state, if still alive.
    fn observe(&mut self) {
        if let Some(inner) = &self.inner {
            if let Some(d) = inner.distance() {
                if d < self.best_distance {
                    self.best_distance = d;
                    self.suffix_length = Some(0);
                }
                self.match_seen = true;
            }
        }
    }
}

impl<S: ExecutionState> ExecutionState for PrefixState<S> {
    fn step(&self, c: Rune) -> Option<Self> {
        let mut next = PrefixState {
            inner: self.inner.as_ref().and_then(|s| s.step(c)),
            match_seen: self.match_seen,
            best_distance: self.best_distance,
            length_so_far: self.length_so_far + 1,
            suffix_length: self.suffix_length.map(|n| n + 1),
        };
        next.observe();
        // The wrapper itself never dies: once a match has been seen, or the
        // inner automaton might still reach one, the trie driver should keep
        // descending. Only report exhaustion once the inner state is dead
        // *and* nothing has ever matched - there is nothing useful left to
        // explore down that path.
        if next.inner.is_none() && !next.match_seen {
            return None;
        }
        Some(next)
    }

    fn is_final(&self) -> bool {
        self.match_seen
    }

    fn distance(&self) -> Option<u32> {
        self.match_seen.then_some(self.best_distance)
    }

    fn prefix_metadata(&self) -> Option<(usize, usize)> {
        let suffix = self.suffix_length? as usize;
        let matched = self.length_so_far as usize - suffix;
        Some((matched, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::ExactState;
    use crate::rune::{CaseSensitive, Rune};

    fn drive(pattern: &str, text: &str) -> Option<PrefixState<ExactState<'static, CaseSensitive>>> {
        let pattern: &'static [Rune] = Box::leak(pattern.chars().collect::<Vec<_>>().into_boxed_slice());
        let mut state = PrefixState::start(ExactState::<CaseSensitive>::start(pattern));
        for c in text.chars() {
            state = state.step(c)?;
        }
        Some(state)
    }

    #[test]
    fn matches_exact_prefix() {
        let state = drive("12", "12").unwrap();
        assert!(state.is_final());
        assert_eq!(state.distance(), Some(0));
        assert_eq!(state.prefix_metadata(), Some((2, 0)));
    }

    #[test]
    fn keeps_succeeding_past_the_match() {
        // "12" is a prefix of "123"; the tracker must keep reporting
        // is_final (and a usable prefix_metadata) once the inner exact
        // matcher for "12" has died against the extra "3".
        let state = drive("12", "123").unwrap();
        assert!(state.is_final());
        assert_eq!(state.distance(), Some(0));
        assert_eq!(state.prefix_metadata(), Some((2, 1)));
    }

    #[test]
    fn never_matching_eventually_dies() {
        assert!(drive("12", "9").is_none());
    }

    #[test]
    fn empty_pattern_matches_everything_as_a_prefix() {
        let state = drive("", "anything").unwrap();
        assert!(state.is_final());
        assert_eq!(state.distance(), Some(0));
    }
}
