// Household Report - Core Library
// Everything except file access lives here; the binary only reads lines and prints

pub mod address;
pub mod resident;
pub mod parser;
pub mod household;
pub mod report;
pub mod export;
pub mod pipeline;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use address::{Address, APARTMENT_MARKER, standardize};
pub use resident::Resident;
pub use parser::{LineFormat, QuotedLineParser, RecordParser, FIELD_COUNT};
pub use household::{group_households, Household, Households};
pub use report::ReportFormatter;
pub use export::{collect_exports, to_csv, to_json, HouseholdExport, ResidentExport};
pub use pipeline::{build_households, parse_all, parse_all_with, start, start_with};
pub use config::ReportConfig;
pub use error::{HouseholdError, LineFailure, ParseError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
