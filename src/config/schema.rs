use serde::{Deserialize, Serialize};

use crate::samples::SampleCase;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Extra self-test cases appended to the built-in sample table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<SampleCase>,
}

impl Config {
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
