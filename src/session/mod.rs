//! Interactive practice loop: read an original sentence and a response, print
//! the score, repeat until the user quits or input ends.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::output::{format_report, rule};
use crate::prompt::Prompter;
use crate::scoring::{calculate_score, AlignmentPolicy, FeedbackConfig};

const QUIT: &str = "q";
const FAREWELL: &str = "Thank you for using the Write-from-Dictation Scorer. Good luck with your exam!";

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub policy: AlignmentPolicy,
    pub feedback: FeedbackConfig,
    pub use_colors: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub scores: Vec<u8>,
}

impl SessionSummary {
    pub fn rounds(&self) -> usize {
        self.scores.len()
    }

    pub fn mean_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: u32 = self.scores.iter().map(|&s| s as u32).sum();
        Some(sum as f64 / self.scores.len() as f64)
    }
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case(QUIT)
}

/// Run the practice loop until `q` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    settings: &SessionSettings,
) -> Result<SessionSummary> {
    let mut p = Prompter::new(input, output);
    let mut summary = SessionSummary::default();

    writeln!(p.output())?;
    writeln!(p.output(), "===== Write-from-Dictation Scoring Calculator =====")?;
    writeln!(p.output(), "{}", rule())?;
    writeln!(p.output(), "Type 'q' at any prompt to quit the program")?;

    loop {
        writeln!(p.output())?;
        writeln!(p.output(), "{}", rule())?;

        let original = match p.prompt("\nOriginal sentence: ")? {
            Some(line) if !is_quit(&line) => line,
            _ => break,
        };
        let response = match p.prompt("Your response: ")? {
            Some(line) if !is_quit(&line) => line,
            _ => break,
        };

        let result = calculate_score(&original, &response, settings.policy);
        debug!(round = summary.rounds() + 1, score = result.score, "session round");
        summary.scores.push(result.score);

        writeln!(p.output())?;
        writeln!(
            p.output(),
            "{}",
            format_report(&original, &response, &result, &settings.feedback, settings.use_colors)
        )?;
    }

    writeln!(p.output())?;
    if let Some(mean) = summary.mean_score() {
        writeln!(
            p.output(),
            "Scored {} attempt(s), average {:.0}%.",
            summary.rounds(),
            mean
        )?;
    }
    writeln!(p.output(), "{}", FAREWELL)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SessionSettings {
        SessionSettings {
            policy: AlignmentPolicy::Greedy,
            feedback: FeedbackConfig::default(),
            use_colors: false,
        }
    }

    fn run(input: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = run_session(input.as_bytes(), &mut out, &settings()).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (summary, text) = run("q\n");
        assert_eq!(summary.rounds(), 0);
        assert_eq!(summary.mean_score(), None);
        assert!(text.contains("Good luck with your exam!"));
        assert!(!text.contains("Your score"));
    }

    #[test]
    fn test_quit_is_case_insensitive_at_response_prompt() {
        let (summary, text) = run("Some sentence.\n  Q \n");
        assert_eq!(summary.rounds(), 0);
        assert!(text.contains("Your response: "));
    }

    #[test]
    fn test_rounds_until_eof() {
        let (summary, text) = run("One two three four.\none two three four\nOne two.\none\n");
        assert_eq!(summary.scores, vec![100, 50]);
        assert_eq!(summary.mean_score(), Some(75.0));
        assert!(text.contains("Perfect!"));
        assert!(text.contains("Missing words: two"));
        assert!(text.contains("Scored 2 attempt(s), average 75%."));
    }

    #[test]
    fn test_q_inside_sentence_does_not_quit() {
        let (summary, _) = run("q and a\nq and a\nq\n");
        assert_eq!(summary.scores, vec![100]);
    }
}
