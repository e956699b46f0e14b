//! Parsed access log record.
//!
//! A `LogRecord` is the structured form of one S3 server access log line.
//! Field names and their order mirror the positional layout of the log
//! format; the bulk indexing path serializes records with these exact keys.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field names of the S3 server access log format, in positional order.
///
/// The Nth capture group of the line grammar always maps to the Nth entry
/// of this list. The last six fields only appear on newer log lines.
pub const ACCESS_LOG_FIELDS: [&str; 26] = [
    "bucketowner",
    "bucket",
    "requestdatetime",
    "remoteip",
    "requester",
    "requestid",
    "operation",
    "key",
    "requesturi_operation",
    "requesturi_key",
    "requesturi_httpprotoversion",
    "httpstatus",
    "errorcode",
    "bytessent",
    "objectsize",
    "totaltime",
    "turnaroundtime",
    "referrer",
    "useragent",
    "versionid",
    "hostid",
    "sigv",
    "ciphersuite",
    "authtype",
    "endPoint",
    "tlsversion",
];

/// Sentinel stored for fields that are absent from a log line.
///
/// S3 writes `-` for fields it has no value for, so absent optional
/// trailing fields get the same representation as logged dashes.
pub const MISSING_FIELD: &str = "-";

/// One parsed access log line.
///
/// A record always carries every field of [`ACCESS_LOG_FIELDS`]; optional
/// fields that were absent on the line hold [`MISSING_FIELD`]. Records can
/// only be built through [`LogRecord::from_values`], which enforces the
/// one-value-per-field invariant, so a record never exists for a line that
/// did not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl LogRecord {
    /// Build a record from positionally extracted field values.
    ///
    /// `values` must contain exactly one entry per field name, in the order
    /// of [`ACCESS_LOG_FIELDS`]; `None` entries are stored as
    /// [`MISSING_FIELD`]. Returns `None` if the count does not match.
    pub fn from_values<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let values: Vec<Option<&str>> = values.into_iter().collect();
        if values.len() != ACCESS_LOG_FIELDS.len() {
            return None;
        }

        let fields = ACCESS_LOG_FIELDS
            .iter()
            .zip(values)
            .map(|(name, value)| {
                (
                    (*name).to_string(),
                    value.unwrap_or(MISSING_FIELD).to_string(),
                )
            })
            .collect();

        Some(Self { fields })
    }

    /// Look up a field value by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Number of fields in the record. Always the full field list length.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record holds no fields. Never the case for a record
    /// built through `from_values`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
