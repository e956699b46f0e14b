//! S3 client implementation.
//!
//! This module provides the concrete implementation of `ObjectStoreClient`
//! using the AWS SDK.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use tracing::{debug, info};

use crate::errors::ObjectStoreError;
use crate::interfaces::ObjectStoreClient;

/// S3 object store implementation.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Create a store from the ambient AWS configuration (environment,
    /// profile, or instance role).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        info!("Created S3 object store client");
        Self {
            client: aws_sdk_s3::Client::new(&config),
        }
    }

    /// Create a store from an existing SDK client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStoreClient for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    ObjectStoreError::not_found(bucket, key)
                } else {
                    ObjectStoreError::request(service_error.to_string())
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| ObjectStoreError::request(e.to_string()))?;

        let bytes = data.into_bytes().to_vec();
        debug!(bucket = %bucket, key = %key, size = bytes.len(), "Fetched object");
        Ok(bytes)
    }
}
