//! # Access Log Indexer Pipeline
//!
//! This crate provides the ingestion pipeline that turns S3 access log
//! objects into indexed documents.
//!
//! ## Architecture
//!
//! The pipeline follows a linear Parser-Schema-Indexer flow per object:
//!
//! 1. **Parser**: Decomposes each log line into a typed record
//! 2. **SchemaManager**: Ensures the index template and index exist
//! 3. **BatchIndexer**: Bulk-writes all documents in one call
//! 4. **IngestionPipeline**: Coordinates the flow per trigger record

pub mod errors;
pub mod indexer;
pub mod orchestrator;
pub mod parser;
pub mod schema;

pub use errors::{PipelineError, SchemaStage};
pub use indexer::{BatchIndexer, BatchResult};
pub use orchestrator::{IngestReport, IngestionPipeline, ParseFailure};
pub use parser::{AccessLogParser, ParseError};
pub use schema::SchemaManager;
