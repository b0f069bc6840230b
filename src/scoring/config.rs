use serde::{Deserialize, Serialize};

use super::alignment::AlignmentPolicy;

pub const DEFAULT_GREAT_THRESHOLD: u8 = 80;
pub const DEFAULT_GOOD_THRESHOLD: u8 = 60;

/// Scoring configuration.
///
/// Every field is optional; missing values fall back to the historical
/// behavior (greedy alignment, feedback tiers at 80 and 60).
///
/// Example YAML:
/// ```yaml
/// scoring:
///   policy: ordered
///   feedback:
///     great: 85
///     good: 65
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Alignment policy: "greedy" (default) or "ordered"
    #[serde(default)]
    pub policy: Option<AlignmentPolicy>,

    /// Score thresholds for the feedback message
    #[serde(default)]
    pub feedback: Option<FeedbackConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            policy: Some(AlignmentPolicy::Greedy),
            feedback: Some(FeedbackConfig::default()),
        }
    }
}

impl ScoringConfig {
    pub fn effective_policy(&self) -> AlignmentPolicy {
        self.policy.unwrap_or_default()
    }

    pub fn effective_feedback(&self) -> FeedbackConfig {
        self.feedback.clone().unwrap_or_default()
    }
}

/// Feedback tier thresholds.
///
/// A non-perfect score at or above `great` gets the "great" message, at or
/// above `good` the "good" message, anything lower "keep practicing".
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub great: Option<u8>,

    #[serde(default)]
    pub good: Option<u8>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            great: Some(DEFAULT_GREAT_THRESHOLD),
            good: Some(DEFAULT_GOOD_THRESHOLD),
        }
    }
}

impl FeedbackConfig {
    pub fn effective_great(&self) -> u8 {
        self.great.unwrap_or(DEFAULT_GREAT_THRESHOLD)
    }

    pub fn effective_good(&self) -> u8 {
        self.good.unwrap_or(DEFAULT_GOOD_THRESHOLD)
    }
}
