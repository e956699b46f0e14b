//! Error types for the ingestion pipeline.
//!
//! Every variant is fatal for the invocation it occurs in; per-line parse
//! failures are not errors at this level (see `orchestrator::ParseFailure`).

use std::fmt;

use thiserror::Error;

use access_log_indexer_repository::{ObjectStoreError, SearchError};

/// Which schema stage a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStage {
    /// Ensuring the index template.
    Template,
    /// Ensuring the concrete index.
    Index,
}

impl fmt::Display for SchemaStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaStage::Template => write!(f, "template"),
            SchemaStage::Index => write!(f, "index"),
        }
    }
}

/// Errors that abort a pipeline invocation.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Template or index check-or-create failed for a non-benign reason.
    #[error("Schema error ({stage}): {source}")]
    SchemaError {
        /// The stage that failed.
        stage: SchemaStage,
        /// The underlying store failure.
        source: SearchError,
    },

    /// The source object could not be read.
    #[error("Fetch error for s3://{bucket}/{key}: {source}")]
    FetchError {
        /// The bucket of the unreadable object.
        bucket: String,
        /// The key of the unreadable object.
        key: String,
        /// The underlying store failure.
        source: ObjectStoreError,
    },

    /// The bulk write failed; no document of the batch is acknowledged.
    #[error("Index error: {0}")]
    IndexError(SearchError),
}

impl PipelineError {
    /// Create a schema error tagged with its stage.
    pub fn schema(stage: SchemaStage, source: SearchError) -> Self {
        Self::SchemaError { stage, source }
    }

    /// Create a fetch error for the given object.
    pub fn fetch(
        bucket: impl Into<String>,
        key: impl Into<String>,
        source: ObjectStoreError,
    ) -> Self {
        Self::FetchError {
            bucket: bucket.into(),
            key: key.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_stage() {
        let err = PipelineError::schema(
            SchemaStage::Template,
            SearchError::template("bad mapping body"),
        );
        assert!(err.to_string().contains("template"));

        let err = PipelineError::schema(
            SchemaStage::Index,
            SearchError::index_creation("permission denied"),
        );
        assert!(err.to_string().contains("(index)"));
    }

    #[test]
    fn test_fetch_error_names_object() {
        let err = PipelineError::fetch(
            "log-bucket",
            "logs/2019-02-06.log",
            ObjectStoreError::not_found("log-bucket", "logs/2019-02-06.log"),
        );
        assert!(err.to_string().contains("s3://log-bucket/logs/2019-02-06.log"));
    }
}
