// 📋 Report Formatter - Households → human-readable text
//
// The household at 123 Gofer St, Seattle, WA, has 2 occupants:
//     Bob Doe, 123 Gofer St, Seattle, WA, 25

use crate::config::ReportConfig;
use crate::household::{Household, Households};

pub struct ReportFormatter {
    config: ReportConfig,
}

impl ReportFormatter {
    /// Formatter with the default layout (adults are 19+, four-space indent)
    pub fn new() -> Self {
        ReportFormatter {
            config: ReportConfig::new(),
        }
    }

    pub fn with_config(config: ReportConfig) -> Self {
        ReportFormatter { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render every household in Address order
    ///
    /// The header counts every occupant; only adults get a line of their own.
    /// No households → empty string.
    pub fn format(&self, households: &Households) -> String {
        let mut out = String::new();
        for household in households.iter_sorted() {
            self.format_household(&mut out, household);
        }
        out
    }

    fn format_household(&self, out: &mut String, household: &Household) {
        let count = household.occupant_count();
        out.push_str(&format!(
            "The household at {}, has {} {}:\n",
            household.address(),
            count,
            occupant_noun(count)
        ));

        for resident in household.adults(self.config.adult_age_threshold) {
            out.push_str(&format!("{}{}\n", self.config.indent, resident));
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn occupant_noun(count: usize) -> &'static str {
    if count == 1 {
        "occupant"
    } else {
        "occupants"
    }
}

// ============================================================================
// TESTS
// ============================================================================
