// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein automata: the execution-state ABI every matcher implements,
//! and the concrete matchers (exact, parameterized-template, bitparallel,
//! prefix-wrapped) built on top of it.
//!
//! # Module map
//!
//! ```text
//! state.rs       - the ExecutionState trait (C3), the shared ABI
//! exact.rs        - distance-0 walker (C4)
//! nfa.rs          - the Schulz-Mihov NFA position model shared by builder/table paths
//! builder.rs      - parameterized DFA builder + template cache (C5), also backs
//!                   the small-k (k in {1,2}) specializations (C4)
//! bitparallel.rs  - bitvector automaton for k <= 30 (C6)
//! prefix.rs       - prefix-tracking wrapper (C7)
//! factory.rs      - construct(): picks a concrete matcher for (pattern, k, metric, case) (C6 surface)
//! dynamic.rs      - boxed trait-object form of ExecutionState, for the "easy" API
//! ```
//!
//! Every concrete state type here is `Copy` and carries no heap allocation,
//! so that `step` never allocates on the hot trie-search path (spec §5
//! "Memory discipline").

mod bitparallel;
mod builder;
mod dynamic;
mod exact;
mod factory;
mod nfa;
mod prefix;
mod state;

pub use bitparallel::BitparallelState;
pub use builder::{TemplateDfa, TemplateState};
pub use dynamic::{BoxedState, DynExecutionState};
pub use exact::ExactState;
pub use factory::{construct, Automaton};
pub use prefix::PrefixState;
pub use state::ExecutionState;

pub use crate::distance::Metric;
