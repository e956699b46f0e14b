//! # Access Log Indexer
//!
//! Main library for the S3 access log indexer.
//!
//! This crate provides the entry point and configuration for running
//! the ingestion pipeline.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid trigger event payload.
    #[error("Event error: {0}")]
    EventError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] access_log_indexer_pipeline::PipelineError),

    /// Search store error.
    #[error("Search error: {0}")]
    SearchError(#[from] access_log_indexer_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an event error.
    pub fn event(msg: impl Into<String>) -> Self {
        Self::EventError(msg.into())
    }
}
