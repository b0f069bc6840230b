use serde::Serialize;
use tracing::debug;

use super::alignment::{align, AlignmentPolicy};
use super::tokenizer::tokenize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub perfect: bool,
    pub matched: usize,
    pub total: usize,
}

/// Score a response with the default greedy policy.
pub fn score(reference: &str, response: &str) -> ScoreResult {
    calculate_score(reference, response, AlignmentPolicy::default())
}

pub fn calculate_score(reference: &str, response: &str, policy: AlignmentPolicy) -> ScoreResult {
    let reference_tokens = tokenize(reference);
    let response_tokens = tokenize(response);
    score_tokens(&reference_tokens, &response_tokens, policy)
}

/// Score already-tokenized sequences.
pub fn score_tokens(reference: &[String], response: &[String], policy: AlignmentPolicy) -> ScoreResult {
    let total = reference.len();

    if total == 0 {
        debug!(response_tokens = response.len(), "empty reference, scoring 0");
        return ScoreResult {
            score: 0,
            missing: Vec::new(),
            extra: response.to_vec(),
            perfect: false,
            matched: 0,
            total: 0,
        };
    }

    let alignment = align(reference, response, policy);
    let matched = alignment.len();

    let missing: Vec<String> = alignment
        .unmatched_reference()
        .into_iter()
        .map(|i| reference[i].clone())
        .collect();
    let extra: Vec<String> = alignment
        .unmatched_response()
        .into_iter()
        .map(|i| response[i].clone())
        .collect();

    // Documented as forgiving "up to 3 incorrect words", but the historical check
    // (deficit <= 3 && matched >= total) only ever holds when every reference word
    // was matched. Extra response words never prevent it.
    let perfect = matched == total;
    let score = if perfect { 100 } else { percentage(matched, total) };

    debug!(
        %policy,
        matched,
        total,
        missing = missing.len(),
        extra = extra.len(),
        score,
        "scored response"
    );

    ScoreResult {
        score,
        missing,
        extra,
        perfect,
        matched,
        total,
    }
}

/// Percentage of `matched` over `total`, rounded half away from zero.
fn percentage(matched: usize, total: usize) -> u8 {
    let raw = (matched as f64 / total as f64) * 100.0;
    raw.round().clamp(0.0, 100.0) as u8
}
