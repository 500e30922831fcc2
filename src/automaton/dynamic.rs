// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Object-safe interop shim over [`ExecutionState`] (spec §4.3's "easy API"
//! surface).
//!
//! `ExecutionState::step` returns `Self`, which makes the trait unusable as
//! a trait object directly - there is no way to name "a `dyn ExecutionState`"
//! since the return type isn't object-safe. Generic call sites never need
//! this (they monomorphize over a concrete `S: ExecutionState`), but a
//! caller juggling automatons of different concrete types in one
//! collection - e.g. running several patterns against the same trie - needs
//! a uniform handle. [`BoxedState`] is that handle: it owns a boxed
//! [`DynExecutionState`] and mutates it in place instead of threading a
//! return value through.

use crate::rune::Rune;

use super::state::ExecutionState;

/// Object-safe counterpart of [`ExecutionState`]: `step` mutates in place
/// and reports whether the state survived, instead of returning `Self`.
pub trait DynExecutionState {
    /// Attempt to consume `c`. Returns `false` (and leaves the state
    /// unspecified-but-valid-to-drop) if the state died.
    fn step_dyn(&mut self, c: Rune) -> bool;
    fn is_final_dyn(&self) -> bool;
    fn distance_dyn(&self) -> Option<u32>;
    fn prefix_metadata_dyn(&self) -> Option<(usize, usize)>;
    fn clone_box(&self) -> Box<dyn DynExecutionState>;
}

/// Blanket wrapper turning any [`ExecutionState`] into a [`DynExecutionState`].
struct Wrapper<S: ExecutionState + 'static>(S);

impl<S: ExecutionState + 'static> DynExecutionState for Wrapper<S> {
    fn step_dyn(&mut self, c: Rune) -> bool {
        match self.0.step(c) {
            Some(next) => {
                self.0 = next;
                true
            }
            None => false,
        }
    }

    fn is_final_dyn(&self) -> bool {
        self.0.is_final()
    }

    fn distance_dyn(&self) -> Option<u32> {
        self.0.distance()
    }

    fn prefix_metadata_dyn(&self) -> Option<(usize, usize)> {
        self.0.prefix_metadata()
    }

    fn clone_box(&self) -> Box<dyn DynExecutionState> {
        Box::new(Wrapper(self.0))
    }
}

/// A boxed, type-erased automaton state. Unlike the generic
/// [`ExecutionState`] implementations, this allocates once at construction
/// and again on every [`Clone`]; it exists for callers that need to hold a
/// heterogeneous collection of automatons, not for the hot search loop.
pub struct BoxedState {
    inner: Box<dyn DynExecutionState>,
}

impl BoxedState {
    pub fn new<S: ExecutionState + 'static>(state: S) -> Self {
        BoxedState {
            inner: Box::new(Wrapper(state)),
        }
    }

    /// Consume `c`, mutating in place. Returns `false` if the state died; the
    /// caller should stop driving this instance.
    pub fn step(&mut self, c: Rune) -> bool {
        self.inner.step_dyn(c)
    }

    pub fn is_final(&self) -> bool {
        self.inner.is_final_dyn()
    }

    pub fn distance(&self) -> Option<u32> {
        self.inner.distance_dyn()
    }

    pub fn prefix_metadata(&self) -> Option<(usize, usize)> {
        self.inner.prefix_metadata_dyn()
    }
}

impl Clone for BoxedState {
    fn clone(&self) -> Self {
        BoxedState {
            inner: self.inner.clone_box(),
        }
    }
}
