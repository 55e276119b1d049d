// 🔄 Pipeline - Raw lines → Residents → Households → Report
//
// All-or-nothing: one bad line fails the whole batch, and every bad line
// is reported so the input can be fixed in one pass.

use crate::error::{HouseholdError, LineFailure, Result};
use crate::household::{group_households, Households};
use crate::parser::{QuotedLineParser, RecordParser};
use crate::report::ReportFormatter;
use crate::resident::Resident;
use tracing::{debug, info, warn};

/// Parse every line with the default parser
pub fn parse_all<I, S>(lines: I) -> Result<Vec<Resident>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_all_with(&QuotedLineParser::new(), lines)
}

/// Parse every line; any failure discards the whole batch
pub fn parse_all_with<P, I, S>(parser: &P, lines: I) -> Result<Vec<Resident>>
where
    P: RecordParser + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    debug!("Parsing records with parser v{}", parser.version());

    let mut residents = Vec::new();
    let mut failures = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let raw = line.as_ref();
        match parser.parse_line(raw) {
            Ok(resident) => residents.push(resident),
            Err(error) => {
                warn!("Rejected line {}: {}", idx + 1, error);
                failures.push(LineFailure {
                    line_number: idx + 1,
                    raw_line: raw.to_string(),
                    error,
                });
            }
        }
    }

    if !failures.is_empty() {
        info!(
            "Input rejected: {} of {} lines malformed",
            failures.len(),
            failures.len() + residents.len()
        );
        return Err(HouseholdError::MalformedInput { failures });
    }

    debug!("Parsed {} residents", residents.len());
    Ok(residents)
}

/// Parse and group; the shared front half of every output format
pub fn build_households<I, S>(lines: I) -> Result<Households>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let residents = parse_all(lines)?;
    Ok(group_households(residents))
}

/// Produce the text report for a sequence of raw lines
///
/// Empty input → empty string. Any malformed line → `MalformedInput`,
/// with no partial report.
pub fn start<I, S>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    start_with(&ReportFormatter::new(), lines)
}

/// Same as [`start`] with a caller-supplied formatter
pub fn start_with<I, S>(formatter: &ReportFormatter, lines: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter().peekable();
    if lines.peek().is_none() {
        debug!("Empty input, nothing to report");
        return Ok(String::new());
    }

    let households = build_households(lines)?;
    info!(
        "Reporting {} households ({} residents)",
        households.len(),
        households.total_occupants()
    );

    Ok(formatter.format(&households))
}

// ============================================================================
// TESTS
// ============================================================================
