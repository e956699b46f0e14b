//! Search store error types.
//!
//! This module defines the error types that can occur during search store
//! operations.

use thiserror::Error;

/// Errors that can occur during search store operations.
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    /// Failed to reach the search store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Template existence check or creation failed.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// Index existence check or creation failed.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Bulk write operation failed.
    #[error("Bulk index error: {0}")]
    BulkIndexError(String),

    /// The resource already exists on the store.
    ///
    /// Raised when a create call lost a race against a concurrent
    /// invocation; callers performing idempotent creation treat this as
    /// success.
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Failed to serialize data for the search store.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Failed to parse a response from the search store.
    #[error("Response error: {0}")]
    ResponseError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a template error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a bulk index error.
    pub fn bulk_index(msg: impl Into<String>) -> Self {
        Self::BulkIndexError(msg.into())
    }

    /// Create an already-exists error.
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists(name.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a response error.
    pub fn response(msg: impl Into<String>) -> Self {
        Self::ResponseError(msg.into())
    }
}
