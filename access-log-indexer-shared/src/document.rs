//! Indexable document wrapper.

use crate::record::LogRecord;

/// A log record paired with the index it is destined for.
///
/// Built by the pipeline once a line has parsed, then moved into the batch
/// indexer; nothing mutates a document after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexableDocument {
    index: String,
    source: LogRecord,
}

impl IndexableDocument {
    /// Wrap a parsed record with its target index name.
    pub fn new(index: impl Into<String>, source: LogRecord) -> Self {
        Self {
            index: index.into(),
            source,
        }
    }

    /// The index this document is written into.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// The parsed record backing this document.
    pub fn source(&self) -> &LogRecord {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ACCESS_LOG_FIELDS;

    #[test]
    fn test_document_carries_index_and_source() {
        let values: Vec<Option<&str>> =
            (0..ACCESS_LOG_FIELDS.len()).map(|_| Some("v")).collect();
        let record = LogRecord::from_values(values).unwrap();

        let doc = IndexableDocument::new("access-logs-index-1", record.clone());

        assert_eq!(doc.index(), "access-logs-index-1");
        assert_eq!(doc.source(), &record);
    }
}
