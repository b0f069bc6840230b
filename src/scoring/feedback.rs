use super::config::FeedbackConfig;
use super::engine::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Perfect,
    Great,
    Good,
    KeepPracticing,
}

impl FeedbackTier {
    /// Pick the tier for a result. A perfect result always wins over thresholds.
    pub fn for_result(result: &ScoreResult, config: &FeedbackConfig) -> Self {
        if result.perfect {
            Self::Perfect
        } else if result.score >= config.effective_great() {
            Self::Great
        } else if result.score >= config.effective_good() {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! You got all the words correct or had minimal errors.",
            Self::Great => "Great job! You got most of the words correct.",
            Self::Good => "Good effort. Try to pay more attention to exact wording.",
            Self::KeepPracticing => {
                "Keep practicing. Focus on listening carefully and spelling correctly."
            }
        }
    }
}
