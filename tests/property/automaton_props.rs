//! Property tests for the Levenshtein automaton dispatch layer.
//!
//! `automaton::construct` picks among three concrete matchers depending on
//! `k` (spec §4.6). These tests check all three paths agree with each other
//! and with the direct DP distance calculator: soundness (an automaton
//! never accepts a candidate further than `k` away) and completeness (it
//! never rejects one within `k`).

use levenshtrie::automaton::{construct, ExecutionState};
use levenshtrie::distance::{distance, Metric};
use levenshtrie::rune::{to_rune_vec, CaseSensitive};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{0,6}").unwrap()
}

fn drive(pattern: &[char], candidate: &str, k: u32, metric: Metric) -> Option<u32> {
    let mut state = construct::<CaseSensitive>(pattern, k, metric).unwrap();
    for c in candidate.chars() {
        match state.step(c) {
            Some(next) => state = next,
            None => return None,
        }
    }
    state.is_final().then(|| state.distance().unwrap())
}

proptest! {
    #[test]
    fn accepts_iff_within_distance(
        pattern in word_strategy(),
        candidate in word_strategy(),
        k in 0u32..=3,
    ) {
        let runes = to_rune_vec(&pattern);
        let actual = distance::<CaseSensitive>(&pattern, &candidate, Metric::Levenshtein) as u32;
        let accepted = drive(&runes, &candidate, k, Metric::Levenshtein);

        prop_assert_eq!(accepted.is_some(), actual <= k);
        if let Some(reported) = accepted {
            prop_assert_eq!(reported, actual);
        }
    }

    #[test]
    fn small_and_large_k_paths_agree(
        pattern in word_strategy(),
        candidate in word_strategy(),
    ) {
        // k=2 routes through the cached template path, k=4 through the
        // bitparallel path; both must report the same verdict whenever the
        // true distance falls on both sides of neither ceiling.
        let runes = to_rune_vec(&pattern);
        let via_template = drive(&runes, &candidate, 2, Metric::Levenshtein);
        let via_bitparallel = drive(&runes, &candidate, 4, Metric::Levenshtein);
        let actual = distance::<CaseSensitive>(&pattern, &candidate, Metric::Levenshtein) as u32;

        if actual <= 2 {
            prop_assert_eq!(via_template, Some(actual));
            prop_assert_eq!(via_bitparallel, Some(actual));
        } else if actual > 4 {
            prop_assert_eq!(via_template, None);
            prop_assert_eq!(via_bitparallel, None);
        }
    }

    #[test]
    fn k0_is_exact_equality(pattern in word_strategy(), candidate in word_strategy()) {
        let runes = to_rune_vec(&pattern);
        let accepted = drive(&runes, &candidate, 0, Metric::Levenshtein);
        prop_assert_eq!(accepted.is_some(), pattern == candidate);
    }
}

#[test]
fn rejects_k_past_the_bitparallel_ceiling() {
    let pattern = to_rune_vec("x");
    let err = construct::<CaseSensitive>(&pattern, 31, Metric::Levenshtein).unwrap_err();
    assert_eq!(
        err,
        levenshtrie::TrieError::UnsupportedDistance { k: 31, ceiling: 30 }
    );
}
