pub mod alignment;
pub mod config;
pub mod engine;
pub mod feedback;
pub mod tokenizer;
pub mod validation;

pub use alignment::{align, align_greedy, align_ordered, Alignment, AlignmentPolicy};
pub use config::*;
pub use engine::{calculate_score, score, score_tokens, ScoreResult};
pub use feedback::FeedbackTier;
pub use tokenizer::{normalize_word, tokenize, PUNCTUATION};
pub use validation::validate_scoring;
