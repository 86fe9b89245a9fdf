use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// How a topic is turned into snapshot cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStrategy {
    /// One prompt, answered with a strict JSON array of `{title, summary}`.
    /// Cards carry markdown summaries.
    #[default]
    SingleCall,
    /// Overview, then three area names, then one explanation per area,
    /// issued one after another. Cards carry subtopic lines.
    MultiCall,
}

impl GenerationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStrategy::SingleCall => "single",
            GenerationStrategy::MultiCall => "multi",
        }
    }
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_call" | "json" => Ok(GenerationStrategy::SingleCall),
            "multi" | "multi_call" | "lines" => Ok(GenerationStrategy::MultiCall),
            other => Err(ConfigError::InvalidStrategy(other.to_string())),
        }
    }
}
