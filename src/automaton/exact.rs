// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distance-0 matcher: plain string equality, walked one scalar at a time.
//!
//! No DP, no table, no NFA - `k=0` means "every input scalar must match the
//! next pattern scalar and all of it must be consumed." This is the fast
//! path the factory picks whenever the caller asks for an exact match with a
//! bound of zero (spec §4.4).

use std::marker::PhantomData;

use super::state::ExecutionState;
use crate::rune::{CasePolicy, Rune};

/// Execution state for exact (edit-distance-0) matching, borrowing the
/// pattern for as long as the automaton that produced it lives.
#[derive(Clone, Copy, Debug)]
pub struct ExactState<'p, C: CasePolicy> {
    pattern: &'p [Rune],
    consumed: u32,
    _policy: PhantomData<C>,
}

impl<'p, C: CasePolicy> ExactState<'p, C> {
    pub(crate) fn start(pattern: &'p [Rune]) -> Self {
        ExactState {
            pattern,
            consumed: 0,
            _policy: PhantomData,
        }
    }
}

impl<'p, C: CasePolicy> ExecutionState for ExactState<'p, C> {
    fn step(&self, c: Rune) -> Option<Self> {
        let idx = self.consumed as usize;
        match self.pattern.get(idx) {
            Some(&p) if C::eq(p, c) => Some(ExactState {
                pattern: self.pattern,
                consumed: self.consumed + 1,
                _policy: PhantomData,
            }),
            _ => None,
        }
    }

    fn is_final(&self) -> bool {
        self.consumed as usize == self.pattern.len()
    }

    fn distance(&self) -> Option<u32> {
        self.is_final().then_some(0)
    }
}
