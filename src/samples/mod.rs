//! Reference/response pairs with their historically expected scores, used as a
//! self-test of the scorer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::scoring::{calculate_score, AlignmentPolicy, ScoreResult};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SampleCase {
    pub reference: String,
    pub response: String,
    pub expected_score: u8,
}

impl SampleCase {
    pub fn new(reference: &str, response: &str, expected_score: u8) -> Self {
        Self {
            reference: reference.to_string(),
            response: response.to_string(),
            expected_score,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampleOutcome {
    pub case: SampleCase,
    pub result: ScoreResult,
}

impl SampleOutcome {
    pub fn matches(&self) -> bool {
        self.result.score == self.case.expected_score
    }
}

/// The built-in sample table.
pub fn builtin_samples() -> Vec<SampleCase> {
    vec![
        SampleCase::new(
            "Our group is meeting tomorrow in the library conference room.",
            "Our group is meeting tomorrow in a the library library's conference room.",
            100,
        ),
        SampleCase::new(
            "An aerial photograph was promptly registered for thorough evaluation.",
            "An area ariel photograph was evaluated for the valuation.",
            44,
        ),
        SampleCase::new(
            "An aerial photograph was promptly registered for thorough evaluation.",
            "An aerial photograph was thorough thoroughly prompted for the evaluation.",
            67,
        ),
        SampleCase::new(
            "Undergraduates may pursue specific interests within certificate programs.",
            "Undergraduates undergraduate may pursue different certificates within specific programs.",
            63,
        ),
        SampleCase::new(
            "She used to be an editor of the student newspaper.",
            "She used to be an editor of a the student student's newspaper.",
            100,
        ),
        SampleCase::new(
            "The toughest part of postgraduate education is the funding.",
            "The toughest part parts of the education is the funding.",
            89,
        ),
    ]
}

/// Load extra sample cases from a YAML list.
pub fn load_samples(path: &Path) -> Result<Vec<SampleCase>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples file at {}", path.display()))?;

    let cases: Vec<SampleCase> = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse samples: invalid YAML in {}", path.display()))?;

    Ok(cases)
}

/// Validate sample cases. Returns all errors at once.
pub fn validate_samples(cases: &[SampleCase]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, case) in cases.iter().enumerate() {
        if case.expected_score > 100 {
            errors.push(format!(
                "samples[{}].expected_score: {} is above 100",
                i, case.expected_score
            ));
        }
        if case.reference.trim().is_empty() {
            errors.push(format!("samples[{}].reference: must not be empty", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Score every case and pair it with its result.
pub fn run_samples(cases: &[SampleCase], policy: AlignmentPolicy) -> Vec<SampleOutcome> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let result = calculate_score(&case.reference, &case.response, policy);
            let outcome = SampleOutcome {
                case: case.clone(),
                result,
            };
            if !outcome.matches() {
                warn!(
                    sample = i + 1,
                    %policy,
                    expected = case.expected_score,
                    calculated = outcome.result.score,
                    "sample score mismatch"
                );
            }
            outcome
        })
        .collect()
}
