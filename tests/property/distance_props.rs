//! Property tests for the direct DP distance calculator.
//!
//! These exercise `levenshtrie::distance::distance` against the metric
//! axioms it claims to satisfy (spec §4.2): identity, symmetry, the
//! triangle inequality for plain Levenshtein, and agreement with a
//! from-scratch reference implementation.

use levenshtrie::distance::{distance, Metric};
use levenshtrie::rune::CaseSensitive;
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,8}").unwrap()
}

/// A second, independent DP implementation used as an oracle. Unlike the
/// crate's own two-row rolling implementation, this keeps the full matrix,
/// trading memory for an implementation simple enough to trust by
/// inspection.
fn reference_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut prev = row[0];
        row[0] = i;
        for j in 1..=b.len() {
            let tmp = row[j];
            row[j] = if a[i - 1] == b[j - 1] {
                prev
            } else {
                1 + prev.min(row[j]).min(row[j - 1])
            };
            prev = tmp;
        }
    }
    row[b.len()]
}

proptest! {
    #[test]
    fn identity_distance_is_zero(word in word_strategy()) {
        prop_assert_eq!(distance::<CaseSensitive>(&word, &word, Metric::Levenshtein), 0);
    }

    #[test]
    fn distance_is_symmetric(a in word_strategy(), b in word_strategy()) {
        let ab = distance::<CaseSensitive>(&a, &b, Metric::Levenshtein);
        let ba = distance::<CaseSensitive>(&b, &a, Metric::Levenshtein);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn matches_reference_implementation(a in word_strategy(), b in word_strategy()) {
        let got = distance::<CaseSensitive>(&a, &b, Metric::Levenshtein);
        let want = reference_levenshtein(&a, &b);
        prop_assert_eq!(got, want);
    }

    #[test]
    fn triangle_inequality_holds(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        let ab = distance::<CaseSensitive>(&a, &b, Metric::Levenshtein);
        let bc = distance::<CaseSensitive>(&b, &c, Metric::Levenshtein);
        let ac = distance::<CaseSensitive>(&a, &c, Metric::Levenshtein);
        prop_assert!(ac <= ab + bc);
    }

    #[test]
    fn restricted_edit_never_exceeds_levenshtein(a in word_strategy(), b in word_strategy()) {
        let lev = distance::<CaseSensitive>(&a, &b, Metric::Levenshtein);
        let osa = distance::<CaseSensitive>(&a, &b, Metric::RestrictedEdit);
        prop_assert!(osa <= lev);
    }

    #[test]
    fn adjacent_transposition_is_distance_one_under_restricted_edit(word in "[a-z]{2,8}") {
        let chars: Vec<char> = word.chars().collect();
        if chars[0] != chars[1] {
            let mut swapped = chars.clone();
            swapped.swap(0, 1);
            let swapped: String = swapped.into_iter().collect();
            let got = distance::<CaseSensitive>(&word, &swapped, Metric::RestrictedEdit);
            prop_assert_eq!(got, 1);
        }
    }
}
