//! Access log line parser.
//!
//! Decomposes one line of the S3 server access log format into a
//! [`LogRecord`]. The format is space-delimited and positional, with three
//! quoted sub-fields (request line, referrer, user agent) and six trailing
//! fields that older log lines omit entirely.

use regex::Regex;
use thiserror::Error;

use access_log_indexer_shared::{LogRecord, ACCESS_LOG_FIELDS};

/// The S3 server access log line grammar.
///
/// One capture group per entry of [`ACCESS_LOG_FIELDS`], in order. The
/// final non-capturing group holds the six optional trailing fields; when
/// it does not participate in a match, those groups are absent and map to
/// the missing-field sentinel. The trailing `.*` tolerates fields appended
/// to the format after `tlsversion`.
const ACCESS_LOG_PATTERN: &str = r#"^([^ ]*) ([^ ]*) \[(.*?)\] ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*) "([^ ]*) ([^ ]*) (- |[^ ]*)" (-|[0-9]*) ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*) ("[^"]*") ([^ ]*)(?: ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*) ([^ ]*))?.*$"#;

/// A line that does not match the access log grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line does not match the access log grammar: {line}")]
pub struct ParseError {
    /// The offending line content.
    pub line: String,
}

impl ParseError {
    fn new(line: &str) -> Self {
        Self {
            line: line.to_string(),
        }
    }
}

/// Parser for S3 server access log lines.
///
/// The grammar is compiled once at construction and reused for every line;
/// log objects routinely carry many thousands of lines.
pub struct AccessLogParser {
    pattern: Regex,
}

impl AccessLogParser {
    /// Create a parser with the compiled access log grammar.
    pub fn new() -> Self {
        // The pattern is a constant; compilation is exercised by tests.
        let pattern = Regex::new(ACCESS_LOG_PATTERN).expect("access log pattern compiles");
        Self { pattern }
    }

    /// Parse one log line into a record.
    ///
    /// The line must match the grammar as a whole; capture groups are
    /// mapped positionally onto the fixed field-name list, with absent
    /// optional groups stored as the missing-field sentinel.
    pub fn parse(&self, line: &str) -> Result<LogRecord, ParseError> {
        let captures = self
            .pattern
            .captures(line)
            .ok_or_else(|| ParseError::new(line))?;

        let values =
            (1..=ACCESS_LOG_FIELDS.len()).map(|group| captures.get(group).map(|m| m.as_str()));

        LogRecord::from_values(values).ok_or_else(|| ParseError::new(line))
    }
}

impl Default for AccessLogParser {
    fn default() -> Self {
        Self::new()
    }
}
