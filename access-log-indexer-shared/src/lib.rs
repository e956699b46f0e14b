//! # Access Log Indexer Shared
//!
//! Shared types for the access log indexer system: the parsed log record,
//! the indexable document wrapper, and the S3 trigger event payload.

pub mod document;
pub mod event;
pub mod record;

pub use document::IndexableDocument;
pub use event::{EventRecord, ObjectCreatedEvent};
pub use record::{LogRecord, ACCESS_LOG_FIELDS, MISSING_FIELD};
