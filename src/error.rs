// ⚠️ Errors - Per-line parse failures and batch-level errors

use std::fmt;

/// Why a single input line could not become a Resident
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 6 fields, found {found}")]
    FieldCount { found: usize },

    #[error("age is not a non-negative integer: {value:?}")]
    InvalidAge { value: String },
}

/// One rejected line, kept for the malformed-input report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number in the input
    pub line_number: usize,
    pub raw_line: String,
    pub error: ParseError,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_number, self.error, self.raw_line)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HouseholdError {
    /// At least one line was rejected; the whole batch is discarded
    #[error("input is malformed: {} bad line(s)", .failures.len())]
    MalformedInput { failures: Vec<LineFailure> },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Flushing the CSV buffer failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl HouseholdError {
    /// Rejected lines, empty for non-parse errors
    pub fn failures(&self) -> &[LineFailure] {
        match self {
            HouseholdError::MalformedInput { failures } => failures,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, HouseholdError>;
