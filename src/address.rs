// 🏠 Address Value - Normalized US street address
// Grouping key for households: normalization happens once, at construction
//
// "123 gofer st., Apt. 4" + " seattle, " + "wa." → "123 Gofer St Apt. 4, Seattle, WA"

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Literal marker that starts the apartment/unit portion of a street line
pub const APARTMENT_MARKER: &str = "Apt.";

// ============================================================================
// ADDRESS
// ============================================================================

/// Address - immutable, normalized street address
///
/// Equality, ordering and hashing all work on the normalized fields, so two
/// addresses typed with different casing or punctuation are the same key.
///
/// Ordering: state → city → street → apartment (no apartment sorts first).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    /// Street line without the unit, initial caps, no periods or commas
    street: String,

    /// Unit portion starting at "Apt.", trimmed (None if not present)
    apartment: Option<String>,

    /// City, initial caps
    city: String,

    /// State code, all caps, no periods
    state: String,
}

impl Address {
    /// Build a normalized address from raw parts
    ///
    /// If `street` contains [`APARTMENT_MARKER`], everything from the marker
    /// onwards becomes the apartment and only the text before it is
    /// standardized as the street.
    pub fn new(street: &str, city: &str, state: &str) -> Self {
        let (street_part, apartment) = match street.find(APARTMENT_MARKER) {
            Some(idx) => (&street[..idx], Some(street[idx..].trim().to_string())),
            None => (street, None),
        };

        Address {
            street: standardize(street_part),
            apartment,
            city: standardize(city),
            state: normalize_state(state),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn apartment(&self) -> Option<&str> {
        self.apartment.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Street line as printed, including the unit when there is one
    pub fn street_line(&self) -> String {
        match &self.apartment {
            Some(apt) => format!("{} {}", self.street, apt),
            None => self.street.clone(),
        }
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.state
            .cmp(&other.state)
            .then_with(|| self.city.cmp(&other.city))
            .then_with(|| self.street.cmp(&other.street))
            // Option orders None before Some, which is exactly the unit rule
            .then_with(|| self.apartment.cmp(&other.apartment))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.street_line(), self.city, self.state)
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Standardize a street or city string
///
/// - Trim whitespace
/// - Remove periods and commas
/// - Initial caps on every word ("GOFER" → "Gofer", "st" → "St")
/// - Runs of whitespace collapse to a single space
pub fn standardize(s: &str) -> String {
    let cleaned: String = s.chars().filter(|c| *c != '.' && *c != ',').collect();

    cleaned
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// "sEATTLE" → "Seattle"
///
/// Only the first output char stays upper case, so expanding letters
/// ("ß" → "SS") still capitalize the same way on a second pass.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let upper: String = first.to_uppercase().collect();
    let mut upper_chars = upper.chars();
    let mut out = String::with_capacity(word.len());
    if let Some(lead) = upper_chars.next() {
        out.push(lead);
    }
    out.push_str(&upper_chars.as_str().to_lowercase());
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// "wa." → "WA", " w.a. " → "WA"
///
/// Periods go before trimming so "wa ." cannot leave a trailing space.
fn normalize_state(state: &str) -> String {
    state.replace('.', "").trim().to_uppercase()
}

// ============================================================================
// TESTS
// ============================================================================
