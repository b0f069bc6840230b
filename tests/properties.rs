//! Property-based tests for the scorer.

use proptest::prelude::*;
use wfd_score::scoring::{calculate_score, tokenize, AlignmentPolicy};

/// Small vocabulary so that duplicates and partial overlaps are common.
fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "the", "The", "cat", "cat,", "sat", "on", "mat.", "a", "(dog)", "-", "\"ran\"",
        ]),
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

fn policy() -> impl Strategy<Value = AlignmentPolicy> {
    prop_oneof![Just(AlignmentPolicy::Greedy), Just(AlignmentPolicy::Ordered)]
}

/// True when `sub` can be obtained from `full` by deleting elements.
fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the score is always a percentage
    #[test]
    fn prop_score_in_range(reference in sentence(), response in sentence(), policy in policy()) {
        let result = calculate_score(&reference, &response, policy);
        prop_assert!(result.score <= 100);
    }

    /// Property: missing and extra are order-preserving subsequences of their inputs
    #[test]
    fn prop_missing_and_extra_are_subsequences(
        reference in sentence(),
        response in sentence(),
        policy in policy()
    ) {
        let result = calculate_score(&reference, &response, policy);
        prop_assert!(is_subsequence(&result.missing, &tokenize(&reference)));
        prop_assert!(is_subsequence(&result.extra, &tokenize(&response)));
    }

    /// Property: every token is either matched or reported, never both
    #[test]
    fn prop_counts_balance(reference in sentence(), response in sentence(), policy in policy()) {
        let reference_tokens = tokenize(&reference);
        let response_tokens = tokenize(&response);
        let result = calculate_score(&reference, &response, policy);

        prop_assert_eq!(result.total, reference_tokens.len());
        prop_assert!(result.matched <= reference_tokens.len().min(response_tokens.len()));
        prop_assert_eq!(result.matched + result.missing.len(), reference_tokens.len());
        prop_assert_eq!(result.matched + result.extra.len(), response_tokens.len());
    }

    /// Property: scoring is deterministic
    #[test]
    fn prop_idempotent(reference in sentence(), response in sentence(), policy in policy()) {
        let first = calculate_score(&reference, &response, policy);
        let second = calculate_score(&reference, &response, policy);
        prop_assert_eq!(first, second);
    }

    /// Property: a response identical to a non-empty reference is perfect
    #[test]
    fn prop_identical_is_perfect(reference in sentence(), policy in policy()) {
        prop_assume!(!tokenize(&reference).is_empty());
        let result = calculate_score(&reference, &reference, policy);
        prop_assert_eq!(result.score, 100);
        prop_assert!(result.perfect);
        prop_assert!(result.missing.is_empty());
        prop_assert!(result.extra.is_empty());
    }

    /// Property: perfect exactly when nothing is missing from a non-empty reference
    #[test]
    fn prop_perfect_iff_nothing_missing(
        reference in sentence(),
        response in sentence(),
        policy in policy()
    ) {
        let result = calculate_score(&reference, &response, policy);
        let expect_perfect = result.total > 0 && result.missing.is_empty();
        prop_assert_eq!(result.perfect, expect_perfect);
        if result.perfect {
            prop_assert_eq!(result.score, 100);
        }
    }

    /// Property: appending words to a perfect response keeps it perfect under greedy
    #[test]
    fn prop_extra_words_never_hurt_full_match(reference in sentence(), tail in sentence()) {
        prop_assume!(!tokenize(&reference).is_empty());
        let response = format!("{} {}", reference, tail);
        let result = calculate_score(&reference, &response, AlignmentPolicy::Greedy);
        prop_assert!(result.perfect);
        prop_assert_eq!(result.score, 100);
    }
}
