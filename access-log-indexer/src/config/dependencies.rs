//! Dependency initialization and wiring for the access log indexer.
//!
//! Clients are constructed once here and injected into the pipeline; the
//! pipeline itself never owns client lifecycle.

use std::env;
use std::sync::Arc;
use tracing::info;

use crate::IndexingError;
use access_log_indexer_pipeline::IngestionPipeline;
use access_log_indexer_repository::opensearch::template::{
    DEFAULT_INDEX_NAME, DEFAULT_TEMPLATE_NAME,
};
use access_log_indexer_repository::{
    OpenSearchStore, S3ObjectStore, SearchStoreClient, SearchStoreConfig,
};

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "https://localhost:9200";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured pipeline ready to run.
    pub pipeline: IngestionPipeline,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: search store endpoint (default: https://localhost:9200)
    /// - `OPENSEARCH_USERNAME` / `OPENSEARCH_PASSWORD`: basic-auth credential
    ///   pair (optional; both must be set for authentication)
    /// - `INDEX_NAME`: target index (default: access-logs-index-1)
    /// - `TEMPLATE_NAME`: index template name (default: access_logs_template)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If initialization fails
    pub async fn new() -> Result<Self, IndexingError> {
        let endpoint =
            env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
        let index_name = env::var("INDEX_NAME").unwrap_or_else(|_| DEFAULT_INDEX_NAME.to_string());
        let template_name =
            env::var("TEMPLATE_NAME").unwrap_or_else(|_| DEFAULT_TEMPLATE_NAME.to_string());
        let username = env::var("OPENSEARCH_USERNAME").ok();
        let password = env::var("OPENSEARCH_PASSWORD").ok();

        info!(
            endpoint = %endpoint,
            index_name = %index_name,
            template_name = %template_name,
            authenticated = username.is_some(),
            "Initializing dependencies"
        );

        let mut config = SearchStoreConfig::new(&endpoint)
            .with_index_name(&index_name)
            .with_template_name(&template_name);
        if let (Some(username), Some(password)) = (username, password) {
            config = config.with_credentials(username, password);
        }

        // Initialize search store client
        let search_store = OpenSearchStore::new(&config)
            .map_err(|e| IndexingError::config(format!("Failed to create search store: {}", e)))?;

        // Verify the search store is reachable
        let healthy = search_store
            .health_check()
            .await
            .map_err(|e| IndexingError::config(format!("Search store health check failed: {}", e)))?;

        if !healthy {
            return Err(IndexingError::config("Search store is unhealthy"));
        }

        info!("Search store connection verified");

        // Initialize object store client
        let object_store = S3ObjectStore::from_env().await;

        // Create the pipeline with injected clients
        let pipeline = IngestionPipeline::new(
            Arc::new(object_store),
            Arc::new(search_store),
            template_name,
            index_name,
        );

        Ok(Self { pipeline })
    }
}
