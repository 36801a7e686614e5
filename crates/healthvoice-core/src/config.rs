//! Configuration for extraction limits and aggregation windows

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Longest transcript accepted for extraction (characters)
    pub max_note_chars: usize,

    /// Max records pulled for a windowed view
    pub query_limit: usize,

    /// Days scanned for the logging streak
    pub consistency_days: u32,

    /// Default window for insights
    pub insights_days: u32,

    /// Default window for the clinical summary
    pub summary_days: u32,

    /// Default window for trends
    pub trends_days: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            max_note_chars: 10_000,
            query_limit: 100,
            consistency_days: 30,
            insights_days: 7,
            summary_days: 30,
            trends_days: 30,
        }
    }

    /// Load from a JSON file, falling back to defaults when it doesn't exist.
    /// Missing fields take their default value.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
