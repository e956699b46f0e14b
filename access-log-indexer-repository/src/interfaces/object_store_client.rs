//! Object store client trait definition.

use async_trait::async_trait;

use crate::errors::ObjectStoreError;

/// Abstract interface for reading source objects.
///
/// The pipeline fetches each access log object in full; log delivery bounds
/// object sizes, so no streaming read is needed.
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Fetch the full content of the object at `bucket`/`key`.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError>;
}
