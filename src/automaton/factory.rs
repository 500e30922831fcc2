// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! [`construct`]: picks a concrete matcher for `(pattern, k, metric)` (spec
//! §6), dispatching to the fastest path that can serve the requested `k`
//! rather than always routing through the general bitparallel automaton.

use super::bitparallel::{BitparallelState, MAX_K};
use super::builder::{self, MAX_TEMPLATE_K, TemplateState};
use super::exact::ExactState;
use super::state::ExecutionState;
use crate::distance::Metric;
use crate::error::{Result, TrieError};
use crate::rune::{CasePolicy, Rune};

/// A constructed automaton, dispatched to the cheapest implementation that
/// can serve the requested `k`.
///
/// This is a closed enum rather than a boxed trait object: every variant is
/// `Copy` and allocation-free, so [`ExecutionState::step`] on an `Automaton`
/// monomorphizes down to whichever concrete matcher was picked, with the
/// match itself optimized away in practice since the variant never changes
/// after construction.
#[derive(Clone, Copy)]
pub enum Automaton<'p, C: CasePolicy> {
    Exact(ExactState<'p, C>),
    Template(TemplateState<'p, C>),
    Bitparallel(BitparallelState<'p, C>),
}

/// Build an automaton matching `pattern` within `k` edits under `metric`.
///
/// Returns [`TrieError::UnsupportedDistance`] if `k` exceeds the bitparallel
/// ceiling of [`MAX_K`] (30) - spec §4.6's stated limit.
pub fn construct<'p, C: CasePolicy>(
    pattern: &'p [Rune],
    k: u32,
    metric: Metric,
) -> Result<Automaton<'p, C>> {
    if k > MAX_K {
        return Err(TrieError::UnsupportedDistance { k, ceiling: MAX_K });
    }
    if k == 0 {
        return Ok(Automaton::Exact(ExactState::start(pattern)));
    }
    if k <= MAX_TEMPLATE_K {
        let dfa = builder::get_or_build_template(k, metric);
        return Ok(Automaton::Template(TemplateState::start(dfa, pattern)));
    }
    let with_transpositions = matches!(metric, Metric::RestrictedEdit);
    Ok(Automaton::Bitparallel(BitparallelState::start(
        pattern,
        k,
        with_transpositions,
    )))
}

impl<'p, C: CasePolicy> ExecutionState for Automaton<'p, C> {
    fn step(&self, c: Rune) -> Option<Self> {
        match self {
            Automaton::Exact(s) => s.step(c).map(Automaton::Exact),
            Automaton::Template(s) => s.step(c).map(Automaton::Template),
            Automaton::Bitparallel(s) => s.step(c).map(Automaton::Bitparallel),
        }
    }

    fn is_final(&self) -> bool {
        match self {
            Automaton::Exact(s) => s.is_final(),
            Automaton::Template(s) => s.is_final(),
            Automaton::Bitparallel(s) => s.is_final(),
        }
    }

    fn distance(&self) -> Option<u32> {
        match self {
            Automaton::Exact(s) => s.distance(),
            Automaton::Template(s) => s.distance(),
            Automaton::Bitparallel(s) => s.distance(),
        }
    }
}
