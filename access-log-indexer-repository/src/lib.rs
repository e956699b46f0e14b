//! # Access Log Indexer Repository
//!
//! This crate provides traits and implementations for the remote stores the
//! indexer talks to: the search store holding the access log index and the
//! object store holding the raw log objects. It includes definitions for
//! errors, interfaces, the OpenSearch implementation, and the S3
//! implementation.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod s3;

pub use config::SearchStoreConfig;
pub use errors::{ObjectStoreError, SearchError};
pub use interfaces::{ObjectStoreClient, SearchStoreClient};
pub use self::opensearch::OpenSearchStore;
pub use s3::S3ObjectStore;
