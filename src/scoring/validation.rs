use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref feedback) = config.feedback {
        if let Some(great) = feedback.great {
            if great > 100 {
                errors.push(format!("scoring.feedback.great: {} is above 100", great));
            }
        }
        if let Some(good) = feedback.good {
            if good > 100 {
                errors.push(format!("scoring.feedback.good: {} is above 100", good));
            }
        }

        // Compare resolved values so a lone `good: 90` is caught against the default great
        let great = feedback.effective_great();
        let good = feedback.effective_good();
        if good > great {
            errors.push(format!(
                "scoring.feedback: good ({}) must not exceed great ({})",
                good, great
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
