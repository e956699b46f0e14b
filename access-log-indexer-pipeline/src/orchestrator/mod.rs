//! Orchestrator for the ingestion pipeline.
//!
//! Drives the linear per-object flow: fetch the log object, ensure the
//! schema, parse the lines, and submit one batch. A trigger event can name
//! several objects; each is processed independently.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::errors::PipelineError;
use crate::indexer::BatchIndexer;
use crate::parser::AccessLogParser;
use crate::schema::SchemaManager;
use access_log_indexer_repository::{ObjectStoreClient, SearchStoreClient};
use access_log_indexer_shared::{IndexableDocument, ObjectCreatedEvent};

/// One line that did not match the access log grammar.
///
/// Parse failures are local to their line: they are counted and reported,
/// and every line that did parse is still indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// 1-based line number within the object.
    pub line_number: usize,
    /// The offending line content.
    pub line: String,
}

/// Outcome of ingesting one log object.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// The bucket the object was read from.
    pub bucket: String,
    /// The decoded object key.
    pub key: String,
    /// Number of documents written to the index.
    pub indexed: usize,
    /// Lines that did not match the grammar.
    pub parse_failures: Vec<ParseFailure>,
}

/// Pipeline that turns access log objects into indexed documents.
///
/// Holds injected store clients; nothing here owns process lifecycle or
/// retry policy. Each invocation is self-contained, so the pipeline can be
/// driven concurrently by the trigger host without coordination.
pub struct IngestionPipeline {
    object_store: Arc<dyn ObjectStoreClient>,
    schema: SchemaManager,
    indexer: BatchIndexer,
    parser: AccessLogParser,
}

impl IngestionPipeline {
    /// Create a pipeline over the given store clients.
    pub fn new(
        object_store: Arc<dyn ObjectStoreClient>,
        search_store: Arc<dyn SearchStoreClient>,
        template_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            object_store,
            schema: SchemaManager::new(search_store.clone(), template_name, index_name),
            indexer: BatchIndexer::new(search_store),
            parser: AccessLogParser::new(),
        }
    }

    /// Process every record of a trigger event.
    ///
    /// Records are processed independently; one object's failure does not
    /// stop the others. If any record failed, the first error propagates
    /// after all records were attempted, so the host redelivers the whole
    /// event.
    #[instrument(skip(self, event), fields(records = event.records.len()))]
    pub async fn run(&self, event: &ObjectCreatedEvent) -> Result<Vec<IngestReport>, PipelineError> {
        let mut reports = Vec::with_capacity(event.records.len());
        let mut first_error: Option<PipelineError> = None;

        for record in &event.records {
            let bucket = &record.s3.bucket.name;
            let key = record.s3.object.decoded_key();

            match self.process_object(bucket, &key).await {
                Ok(report) => {
                    info!(
                        bucket = %bucket,
                        key = %key,
                        indexed = report.indexed,
                        parse_failures = report.parse_failures.len(),
                        "Object ingested"
                    );
                    reports.push(report);
                }
                Err(e) => {
                    error!(bucket = %bucket, key = %key, error = %e, "Failed to ingest object");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(reports),
        }
    }

    /// Ingest one log object.
    #[instrument(skip(self))]
    pub async fn process_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<IngestReport, PipelineError> {
        let bytes = self
            .object_store
            .get_object(bucket, key)
            .await
            .map_err(|e| PipelineError::fetch(bucket, key, e))?;

        // Access logs are ASCII; a corrupt byte surfaces as a parse
        // failure on its line instead of failing the whole object.
        let content = String::from_utf8_lossy(&bytes);

        // Template before index: index creation must see the template's
        // mappings already registered.
        self.schema.ensure_template().await?;
        self.schema.ensure_index().await?;

        let mut documents = Vec::new();
        let mut parse_failures = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            match self.parser.parse(line) {
                Ok(record) => {
                    documents.push(IndexableDocument::new(self.schema.index_name(), record));
                }
                Err(failure) => {
                    warn!(
                        key = %key,
                        line_number,
                        line = %failure.line,
                        "Skipping unparseable line"
                    );
                    parse_failures.push(ParseFailure {
                        line_number,
                        line: failure.line,
                    });
                }
            }
        }

        let result = self.indexer.submit(documents).await?;

        Ok(IngestReport {
            bucket: bucket.to_string(),
            key: key.to_string(),
            indexed: result.indexed,
            parse_failures,
        })
    }
}
