// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single slot in the results arena (spec §4.8 "Results arena").

use super::NodeIndex;

/// One value in a key's result list.
///
/// `next` serves double duty: while occupied it threads the key's value
/// list; once freed it threads the arena's free list instead. `value` is
/// `None` only while a slot sits on the free list.
pub(super) struct ResultSlot<T> {
    pub value: Option<T>,
    pub next: NodeIndex,
}
