//! Search store client trait definition.
//!
//! This module defines the abstract interface for search store operations,
//! allowing for different backend implementations (OpenSearch, mocks, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use access_log_indexer_shared::IndexableDocument;

/// Abstract interface for search store operations.
///
/// The pipeline only needs schema management and a bulk write; everything
/// else the backing store can do is out of scope.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>` for consistent error handling.
#[async_trait]
pub trait SearchStoreClient: Send + Sync {
    /// Check whether an index template with the given name exists.
    async fn template_exists(&self, name: &str) -> Result<bool, SearchError>;

    /// Register an index template under the given name.
    ///
    /// Returns `SearchError::AlreadyExists` if the store reports the
    /// template was created concurrently; idempotent callers treat that as
    /// success.
    async fn put_template(&self, name: &str, body: &Value) -> Result<(), SearchError>;

    /// Check whether the index with the given name exists.
    async fn index_exists(&self, name: &str) -> Result<bool, SearchError>;

    /// Create the index with the given name.
    ///
    /// Returns `SearchError::AlreadyExists` if the index was created
    /// concurrently; idempotent callers treat that as success.
    async fn create_index(&self, name: &str) -> Result<(), SearchError>;

    /// Write all documents in a single bulk operation.
    ///
    /// Either every document is acknowledged or the whole batch fails;
    /// partial commits are not reported. Returns the number of documents
    /// written.
    async fn bulk_index(&self, documents: &[IndexableDocument]) -> Result<usize, SearchError>;

    /// Check if the search store is healthy and reachable.
    async fn health_check(&self) -> Result<bool, SearchError>;
}
