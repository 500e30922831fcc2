// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate string matching over a radix-compressed Unicode trie, driven
//! by Levenshtein automata.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────────┐     ┌─────────────┐
//! │   rune.rs   │────▶│    automaton/       │────▶│   trie/     │
//! │ (Rune,      │     │ (ExecutionState,    │     │ (Trie core, │
//! │ CasePolicy) │     │  construct, Exact/  │     │  Map/Multi/ │
//! │             │     │  Template/Bitpar.)  │     │  Set facade)│
//! └─────────────┘     └────────────────────┘     └─────────────┘
//!        │                      │                       │
//!        ▼                      ▼                       ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │         contracts.rs (debug-only arena invariants)            │
//! │         error.rs (TrieError, the fail-fast API boundary)      │
//! │         distance.rs (direct DP distance, used as ground truth)│
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use levenshtrie::{LevenshtrieMap, automaton, distance::Metric, rune::to_rune_vec};
//!
//! let mut map: LevenshtrieMap<&str> = LevenshtrieMap::new();
//! map.add("food", "a word about eating").unwrap();
//! map.add("good", "a word about quality").unwrap();
//! map.add("mood", "a word about feelings").unwrap();
//!
//! let pattern = to_rune_vec("food");
//! let state = automaton::construct(&pattern, 1, Metric::Levenshtein).unwrap();
//! let mut hits: Vec<&str> = map
//!     .search(state)
//!     .into_iter()
//!     .map(|r| *r.value)
//!     .collect();
//! hits.sort_unstable();
//! assert_eq!(hits, vec!["a word about eating", "a word about quality", "a word about feelings"]);
//! ```
//!
//! Three façades share one trie core (see [`trie`]): [`LevenshtrieMap`] (one
//! value per key), [`LevenshtrieMultiMap`] (ordered list per key, duplicates
//! allowed), and [`LevenshtrieSet`] (deduplicated per key, by a configurable
//! equality). All three are generic over a [`rune::CasePolicy`], defaulting
//! to [`rune::CaseSensitive`].
//!
//! # Non-goals
//!
//! This crate has no on-disk persistence, no wire protocol, and no support
//! for concurrent mutation - a [`trie::Trie`] (and its façades) is a plain
//! `Send`-able value type with no interior mutability; callers that need
//! concurrent access own the synchronization themselves. Fuzzy matching
//! tops out at edit distance 30 ([`automaton::BitparallelState`]'s ceiling);
//! nothing here attempts culture-specific collation beyond the
//! single-scalar case folding described on [`rune::CaseInsensitive`].

pub mod automaton;
pub mod contracts;
pub mod distance;
pub mod error;
pub mod rune;
pub mod testing;
pub mod trie;

pub use automaton::{construct, Automaton, BoxedState, DynExecutionState, ExecutionState};
pub use distance::Metric;
pub use error::{Result, TrieError};
pub use rune::{CaseInsensitive, CasePolicy, CaseSensitive, Rune};
pub use trie::{LevenshtrieMap, LevenshtrieMultiMap, LevenshtrieSet, MatchKind, SearchResult};
