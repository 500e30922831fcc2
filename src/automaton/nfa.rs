// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The Schulz-Mihov universal-Levenshtein-automaton NFA position model.
//!
//! This is the shared vocabulary between the parameterized DFA builder
//! (`builder.rs`, spec §4.5) and, conceptually, the small-k specializations
//! (spec §4.4) - both are built by subset-constructing the same NFA, just at
//! different values of `k`.
//!
//! An NFA position `(offset, edits)` means: "this path has consumed `edits`
//! edits so far and has matched the pattern up to `base + offset`, where
//! `base` is the DFA state's window start (`sIndex` in spec vocabulary)."
//! `pending` marks a position mid-transposition: it has tentatively consumed
//! one half of an adjacent-scalar swap and may only complete it, per spec
//! §4.5's rule that a transposed pair forbids re-editing either scalar.

use std::collections::HashMap;

/// One position in the NFA's current position set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(super) struct NfaPos {
    pub offset: i32,
    pub edits: u32,
    pub pending: bool,
}

/// A normalized (window-start-relative) set of NFA positions: one DFA state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub(super) struct PositionSet {
    pub positions: Vec<NfaPos>,
}

impl PositionSet {
    pub fn new(mut positions: Vec<NfaPos>) -> Self {
        positions.sort();
        positions.dedup();
        // Dominance: a pair (i,e) is discarded if some other pair (i',e')
        // satisfies e - e' >= |i - i'|, since it can never reach acceptance
        // more cheaply than the dominating pair. Only applied within the
        // same `pending` flag, since pending positions have a restricted
        // transition set and aren't directly comparable to free ones.
        let mut kept: Vec<NfaPos> = Vec::with_capacity(positions.len());
        for &p in &positions {
            let dominated = positions.iter().any(|&q| {
                q != p
                    && q.pending == p.pending
                    && (p.edits as i64 - q.edits as i64) >= (p.offset - q.offset).unsigned_abs() as i64
            });
            if !dominated {
                kept.push(p);
            }
        }
        kept.sort();
        kept.dedup();
        PositionSet { positions: kept }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Normalize so the minimum offset (over every position, pending or
    /// not) becomes 0, returning the shift amount applied (the DFA's
    /// `indexOffset`).
    pub fn normalize(&self) -> (Self, i32) {
        if self.positions.is_empty() {
            return (PositionSet::default(), 0);
        }
        let min_offset = self.positions.iter().map(|p| p.offset).min().unwrap();
        let shifted = self
            .positions
            .iter()
            .map(|p| NfaPos {
                offset: p.offset - min_offset,
                edits: p.edits,
                pending: p.pending,
            })
            .collect();
        (PositionSet::new(shifted), min_offset)
    }

    /// Smallest edit distance among positions that have consumed the whole
    /// pattern (`offset >= pattern_remaining`), or `None` if no such
    /// position exists within `k`.
    pub fn accepting_distance(&self, pattern_remaining: i32, k: u32) -> Option<u32> {
        self.positions
            .iter()
            .filter(|p| !p.pending && p.offset >= pattern_remaining)
            .map(|p| p.edits + (p.offset - pattern_remaining) as u32)
            .filter(|&d| d <= k)
            .min()
    }
}

/// The initial position set: `(0,0), (1,1), ..., (k,k)`, i.e. "we may have
/// already spent up to `k` edits deleting a prefix of the pattern before
/// consuming any input."
pub(super) fn initial_positions(k: u32) -> PositionSet {
    let positions = (0..=k)
        .map(|e| NfaPos {
            offset: e as i32,
            edits: e,
            pending: false,
        })
        .collect();
    PositionSet::new(positions)
}

/// Compute the successor position set given a characteristic vector.
///
/// `char_class` bit `j` (the `1 << j` bit) is set iff the current input
/// scalar equals the pattern scalar at `base + j`, where `base` is this
/// state's window start. `window_len` bounds how many bits of `char_class`
/// are meaningful (the pattern may run out before `2k+1` scalars remain).
pub(super) fn step(
    state: &PositionSet,
    char_class: u32,
    window_len: i32,
    k: u32,
    with_transpositions: bool,
) -> PositionSet {
    let bit = |j: i32| -> bool { j >= 0 && j < window_len && (char_class & (1 << j)) != 0 };

    let mut next = Vec::new();
    for &p in &state.positions {
        if p.pending {
            // Completing a transposition: input must match P[offset].
            if bit(p.offset) {
                next.push(NfaPos {
                    offset: p.offset + 2,
                    edits: p.edits,
                    pending: false,
                });
            }
            continue;
        }

        // Match (m=0), and delete-then-match (1<=m<=k-edits): skip `m`
        // pattern scalars and match the input against P[offset+m]. This is
        // a single input-consuming transition, not a plain match followed
        // by a separate epsilon deletion move - a deletion only ever pays
        // off once it reaches a scalar the input actually matches, so the
        // two must be fused into one step rather than computed as a
        // closure over already-matched positions (which dominance would
        // then discard before the match they were meant to enable).
        for m in 0..=(k - p.edits) {
            if bit(p.offset + m as i32) {
                next.push(NfaPos {
                    offset: p.offset + m as i32 + 1,
                    edits: p.edits + m,
                    pending: false,
                });
            }
        }

        if p.edits < k {
            // Substitution: consume one input scalar and one pattern scalar.
            next.push(NfaPos {
                offset: p.offset + 1,
                edits: p.edits + 1,
                pending: false,
            });
            // Insertion: consume one input scalar, pattern position stays.
            next.push(NfaPos {
                offset: p.offset,
                edits: p.edits + 1,
                pending: false,
            });

            if with_transpositions && bit(p.offset + 1) {
                // Start of an adjacent-scalar swap: the input matches
                // P[offset+1] first. Completing it (next step, matching
                // P[offset]) finishes at cost edits+1 total.
                next.push(NfaPos {
                    offset: p.offset,
                    edits: p.edits + 1,
                    pending: true,
                });
            }
        }
    }

    PositionSet::new(next)
}

/// Compute a characteristic vector for `c` against pattern scalars
/// `base..base+window_len` using `eq` as the scalar equality test.
pub(super) fn characteristic_vector<F: Fn(usize) -> bool>(window_len: i32, matches_at: F) -> u32 {
    let mut v = 0u32;
    for j in 0..window_len {
        if matches_at(j as usize) {
            v |= 1 << j;
        }
    }
    v
}

/// Subset-construct a DFA over the NFA defined by `step`/`initial_positions`,
/// returning `(states, transition_table)` where `transition_table[state *
/// num_classes + class] = (next_state, index_offset)` and `num_classes =
/// 2^window_width`. `window_width` is `2k+1`.
pub(super) struct SubsetConstruction {
    pub states: Vec<PositionSet>,
    /// `transitions[state][char_class] = Some((next_state, index_offset))`.
    pub transitions: Vec<Vec<Option<(u32, i32)>>>,
    pub k: u32,
    pub with_transpositions: bool,
}

pub(super) fn build(k: u32, with_transpositions: bool) -> SubsetConstruction {
    use std::collections::VecDeque;

    let window_width = 2 * k as i32 + 1;
    let num_classes = 1usize << window_width;

    let mut states: Vec<PositionSet> = Vec::new();
    let mut index: HashMap<PositionSet, u32> = HashMap::new();
    let mut transitions: Vec<Vec<Option<(u32, i32)>>> = Vec::new();
    let mut queue: VecDeque<u32> = VecDeque::new();

    let (start, _) = initial_positions(k).normalize();
    states.push(start.clone());
    index.insert(start, 0);
    transitions.push(vec![None; num_classes]);
    queue.push_back(0);

    while let Some(id) = queue.pop_front() {
        let state = states[id as usize].clone();
        for class in 0..num_classes {
            let next_set = step(&state, class as u32, window_width, k, with_transpositions);
            if next_set.is_empty() {
                continue;
            }
            let (normalized, shift) = next_set.normalize();
            let next_id = if let Some(&existing) = index.get(&normalized) {
                existing
            } else {
                let new_id = states.len() as u32;
                states.push(normalized.clone());
                index.insert(normalized, new_id);
                transitions.push(vec![None; num_classes]);
                queue.push_back(new_id);
                new_id
            };
            transitions[id as usize][class] = Some((next_id, shift));
        }
    }

    SubsetConstruction {
        states,
        transitions,
        k,
        with_transpositions,
    }
}
