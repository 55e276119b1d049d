// ⚙️ Report Configuration
// Knobs for the household report; defaults reproduce the standard layout

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Residents strictly older than this are listed (default: 18)
    pub adult_age_threshold: u32,

    /// Prefix for each listed resident line (default: four spaces)
    pub indent: String,
}

impl ReportConfig {
    /// Create config with default values
    pub fn new() -> Self {
        ReportConfig {
            adult_age_threshold: 18,
            indent: "    ".to_string(),
        }
    }

    /// Builder pattern: override the adult threshold
    pub fn with_adult_age_threshold(mut self, threshold: u32) -> Self {
        self.adult_age_threshold = threshold;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
