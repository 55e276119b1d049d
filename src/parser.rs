// 🏗️ Record Parser - One input line → one Resident
// Expected layout: FirstName,LastName,AddressStreet,AddressCity,AddressState,Age
//
// Two line shapes are accepted:
//   Bob,Doe,123 Gofer St,Seattle,WA,25
//   "Bob","Doe","123 Gofer St, Apt. 4","Seattle","WA","25"

use crate::address::Address;
use crate::error::ParseError;
use crate::resident::Resident;
use tracing::trace;

/// Number of fields in every valid record
pub const FIELD_COUNT: usize = 6;

/// Visible separator between quote-wrapped fields
const QUOTED_DELIMITER: &str = "\",\"";

/// Internal separator (ASCII unit separator) - never expected in the data
const INTERNAL_SEPARATOR: char = '\u{1F}';

// ============================================================================
// LINE FORMAT
// ============================================================================

/// LineFormat - how the fields of one line are delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// Fields wrapped in quotes, `","` between them; bare commas are data
    Quoted,

    /// Bare comma-separated fields
    Plain,
}

impl LineFormat {
    /// Pick the format from the line itself
    ///
    /// Any `","` sequence means the quoted layout is in use.
    pub fn detect(raw: &str) -> Self {
        if raw.contains(QUOTED_DELIMITER) {
            LineFormat::Quoted
        } else {
            LineFormat::Plain
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LineFormat::Quoted => "quoted",
            LineFormat::Plain => "plain",
        }
    }
}

// ============================================================================
// PARSER TRAIT
// ============================================================================

/// RecordParser - turns a raw line into a Resident
///
/// Implementations never panic on bad data: a line that does not describe a
/// resident comes back as a [`ParseError`].
pub trait RecordParser {
    fn parse_line(&self, raw: &str) -> Result<Resident, ParseError>;

    /// Parser version (shows up in debug logs)
    fn version(&self) -> &str {
        "1.0.0"
    }
}

/// Default parser for the household input format
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedLineParser;

impl QuotedLineParser {
    pub fn new() -> Self {
        QuotedLineParser
    }

    /// Split a line into its raw fields, quotes removed
    pub fn split_fields(&self, raw: &str) -> Vec<String> {
        let format = LineFormat::detect(raw);
        trace!("Splitting {} line: {:?}", format.name(), raw);

        match format {
            LineFormat::Quoted => raw
                .replace(QUOTED_DELIMITER, &INTERNAL_SEPARATOR.to_string())
                .replace('"', "")
                .split(INTERNAL_SEPARATOR)
                .map(str::to_string)
                .collect(),
            LineFormat::Plain => raw
                .replace('"', "")
                .split(',')
                .map(str::to_string)
                .collect(),
        }
    }
}

impl RecordParser for QuotedLineParser {
    fn parse_line(&self, raw: &str) -> Result<Resident, ParseError> {
        let fields = self.split_fields(raw);
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount {
                found: fields.len(),
            });
        }

        let age = parse_age(&fields[5])?;
        let address = Address::new(&fields[2], &fields[3], &fields[4]);

        Ok(Resident::new(&fields[0], &fields[1], &address, age))
    }
}

/// Surrounding whitespace is tolerated, signs and fractions are not
fn parse_age(value: &str) -> Result<u32, ParseError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidAge {
            value: value.to_string(),
        })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(LineFormat::detect("Bob,Doe,1 A St,Seattle,WA,25"), LineFormat::Plain);
        assert_eq!(
            LineFormat::detect("\"Bob\",\"Doe\",\"1 A St\",\"Seattle\",\"WA\",\"25\""),
            LineFormat::Quoted
        );
        assert_eq!(LineFormat::Quoted.name(), "quoted");
        assert_eq!(LineFormat::Plain.name(), "plain");
    }

    #[test]
    fn test_parse_plain_line() {
        let parser = QuotedLineParser::new();
        let resident = parser.parse_line("Bob,Doe,123 Gofer St,Seattle,WA,25").unwrap();

        assert_eq!(resident.first_name(), "Bob");
        assert_eq!(resident.last_name(), "Doe");
        assert_eq!(resident.address(), &Address::new("123 Gofer St", "Seattle", "WA"));
        assert_eq!(resident.age(), 25);
    }

    #[test]
    fn test_parse_quoted_line_keeps_inner_commas() {
        let parser = QuotedLineParser::new();
        let line = "\"Dave\",\"Smith\",\"123 main st., Apt. 4\",\"seattle\",\"wa\",\"43\"";
        let resident = parser.parse_line(line).unwrap();

        assert_eq!(resident.first_name(), "Dave");
        assert_eq!(resident.last_name(), "Smith");
        assert_eq!(resident.address().street(), "123 Main St");
        assert_eq!(resident.address().apartment(), Some("Apt. 4"));
        assert_eq!(resident.address().city(), "Seattle");
        assert_eq!(resident.address().state(), "WA");
        assert_eq!(resident.age(), 43);
    }

    #[test]
    fn test_split_fields_quoted() {
        let parser = QuotedLineParser::new();
        let fields = parser.split_fields("\"a\",\"b, c\",\"d\"");
        assert_eq!(fields, vec!["a", "b, c", "d"]);
    }

    #[test]
    fn test_five_fields_rejected() {
        let parser = QuotedLineParser::new();
        let err = parser.parse_line("Bob,Doe,123 Gofer St,Seattle,25").unwrap_err();
        assert_eq!(err, ParseError::FieldCount { found: 5 });
    }

    #[test]
    fn test_seven_fields_rejected() {
        let parser = QuotedLineParser::new();
        let err = parser
            .parse_line("Bob,Doe,123 Gofer St,Apt 4,Seattle,WA,25")
            .unwrap_err();
        assert_eq!(err, ParseError::FieldCount { found: 7 });
    }

    #[test]
    fn test_blank_line_rejected() {
        let parser = QuotedLineParser::new();
        assert_eq!(
            parser.parse_line("").unwrap_err(),
            ParseError::FieldCount { found: 1 }
        );
    }

    #[test]
    fn test_non_numeric_age_rejected() {
        let parser = QuotedLineParser::new();
        let err = parser.parse_line("Bob,Doe,123 Gofer St,Seattle,WA,old").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidAge {
                value: "old".to_string()
            }
        );
    }

    #[test]
    fn test_negative_age_rejected() {
        let parser = QuotedLineParser::new();
        let err = parser.parse_line("Bob,Doe,123 Gofer St,Seattle,WA,-3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidAge { .. }));
    }

    #[test]
    fn test_age_whitespace_tolerated() {
        let parser = QuotedLineParser::new();
        let resident = parser.parse_line("Bob,Doe,123 Gofer St,Seattle,WA, 25 ").unwrap();
        assert_eq!(resident.age(), 25);
    }

    #[test]
    fn test_default_version() {
        assert_eq!(QuotedLineParser::new().version(), "1.0.0");
    }
}
