//! Object store error types.

use thiserror::Error;

/// Errors that can occur when reading a source object.
#[derive(Error, Debug, Clone)]
pub enum ObjectStoreError {
    /// The requested object does not exist or is not visible.
    #[error("Object not found: s3://{bucket}/{key}")]
    NotFound {
        /// The bucket that was queried.
        bucket: String,
        /// The object key that was queried.
        key: String,
    },

    /// The read request failed for another reason (access denied, transport).
    #[error("Object store request error: {0}")]
    RequestError(String),
}

impl ObjectStoreError {
    /// Create a not-found error.
    pub fn not_found(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }
}
