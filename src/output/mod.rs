pub mod formatter;

pub use formatter::{
    format_feedback, format_json, format_report, format_sample_report, format_tsv, rule,
    should_use_colors,
};
