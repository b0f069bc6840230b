use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::samples::SampleOutcome;
use crate::scoring::{FeedbackConfig, FeedbackTier, ScoreResult};

const MAX_RULE_WIDTH: usize = 60;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Horizontal separator, at most 60 columns and never wider than the terminal.
pub fn rule() -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| (w as usize).min(MAX_RULE_WIDTH))
        .unwrap_or(MAX_RULE_WIDTH);
    "-".repeat(width)
}

/// Color a score by tier: green for great/perfect, yellow for good, red otherwise.
fn paint_score(score: u8, tier: FeedbackTier, use_colors: bool) -> String {
    let text = format!("{}%", score);
    if !use_colors {
        return text;
    }
    match tier {
        FeedbackTier::Perfect | FeedbackTier::Great => text.green().bold().to_string(),
        FeedbackTier::Good => text.yellow().bold().to_string(),
        FeedbackTier::KeepPracticing => text.red().bold().to_string(),
    }
}

/// Multi-line feedback for one attempt: score, then either the perfect message or
/// the missing/extra words followed by the tier message.
pub fn format_feedback(result: &ScoreResult, feedback: &FeedbackConfig, use_colors: bool) -> String {
    let tier = FeedbackTier::for_result(result, feedback);
    let mut lines = vec![format!("Your score: {}", paint_score(result.score, tier, use_colors))];

    if tier == FeedbackTier::Perfect {
        lines.push(tier.message().to_string());
        return lines.join("\n");
    }

    if !result.missing.is_empty() {
        let words = result.missing.join(", ");
        lines.push(String::new());
        if use_colors {
            lines.push(format!("Missing words: {}", words.red()));
        } else {
            lines.push(format!("Missing words: {}", words));
        }
        lines.push("These words were in the original but missing from your response.".to_string());
    }

    if !result.extra.is_empty() {
        let words = result.extra.join(", ");
        lines.push(String::new());
        if use_colors {
            lines.push(format!("Extra/incorrect words: {}", words.yellow()));
        } else {
            lines.push(format!("Extra/incorrect words: {}", words));
        }
        lines.push("These words were in your response but not in the original.".to_string());
    }

    lines.push(String::new());
    lines.push("Feedback:".to_string());
    lines.push(tier.message().to_string());
    lines.join("\n")
}

/// Full report: the two sentences between rules, then the feedback block.
pub fn format_report(
    reference: &str,
    response: &str,
    result: &ScoreResult,
    feedback: &FeedbackConfig,
    use_colors: bool,
) -> String {
    let rule = rule();
    let (original_label, response_label) = if use_colors {
        ("Original:".bold().to_string(), "Response:".bold().to_string())
    } else {
        ("Original:".to_string(), "Response:".to_string())
    };
    format!(
        "{rule}\n{} {}\n{} {}\n{rule}\n{}",
        original_label,
        reference,
        response_label,
        response,
        format_feedback(result, feedback, use_colors),
    )
}

pub fn format_json(result: &ScoreResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize score result")
}

/// Tab-separated: score, perfect, missing (comma-joined), extra (comma-joined)
pub fn format_tsv(result: &ScoreResult) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        result.score,
        result.perfect,
        result.missing.join(","),
        result.extra.join(",")
    )
}

fn format_word_list(words: &[String]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("'{}'", w)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Per-sample blocks followed by a pass count.
pub fn format_sample_report(outcomes: &[SampleOutcome], use_colors: bool) -> String {
    if outcomes.is_empty() {
        return "No samples to run.".to_string();
    }

    let rule = "-".repeat(50);
    let mut blocks = Vec::with_capacity(outcomes.len() + 1);

    for (i, outcome) in outcomes.iter().enumerate() {
        let mark = match (outcome.matches(), use_colors) {
            (true, true) => "✓".green().to_string(),
            (false, true) => "✗".red().to_string(),
            (true, false) => "✓".to_string(),
            (false, false) => "✗".to_string(),
        };
        blocks.push(format!(
            "Sample {}:\nOriginal: {}\nResponse: {}\nCalculated Score: {}%\nExpected Score: {}%\nMatch: {}\nMissing words: {}\nExtra words: {}\n{}",
            i + 1,
            outcome.case.reference,
            outcome.case.response,
            outcome.result.score,
            outcome.case.expected_score,
            mark,
            format_word_list(&outcome.result.missing),
            format_word_list(&outcome.result.extra),
            rule,
        ));
    }

    let passed = outcomes.iter().filter(|o| o.matches()).count();
    blocks.push(format!("{}/{} samples matched", passed, outcomes.len()));
    blocks.join("\n")
}
