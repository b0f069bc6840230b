//! Scoring for write-from-dictation exercises.
//!
//! A response is tokenized, aligned against the reference sentence and scored as
//! the percentage of reference words it recovered:
//!
//! ```
//! let result = wfd_score::scoring::score(
//!     "The toughest part of postgraduate education is the funding.",
//!     "The toughest part parts of the education is the funding.",
//! );
//! assert_eq!(result.score, 89);
//! assert_eq!(result.missing, vec!["postgraduate"]);
//! ```

pub mod config;
pub mod output;
pub mod prompt;
pub mod samples;
pub mod scoring;
pub mod session;
