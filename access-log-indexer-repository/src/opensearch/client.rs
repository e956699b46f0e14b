//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchStoreClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{
        IndicesCreateParts, IndicesExistsParts, IndicesExistsTemplateParts,
        IndicesPutTemplateParts,
    },
    BulkParts, OpenSearch,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::config::SearchStoreConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchStoreClient;
use access_log_indexer_shared::IndexableDocument;

/// Marker the store embeds in "create lost a race" failure responses.
const ALREADY_EXISTS_MARKER: &str = "resource_already_exists_exception";

/// OpenSearch search store implementation.
///
/// Schema management and bulk writes against an OpenSearch endpoint, with
/// optional basic-auth credentials supplied through the config.
pub struct OpenSearchStore {
    client: OpenSearch,
}

impl OpenSearchStore {
    /// Create a new store client for the configured endpoint.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchStore)` - A new client instance
    /// * `Err(SearchError)` - If the endpoint URL is invalid or transport
    ///   setup fails
    pub fn new(config: &SearchStoreConfig) -> Result<Self, SearchError> {
        let parsed_url =
            Url::parse(&config.endpoint).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.auth(Credentials::Basic(username.clone(), password.clone()));
        }

        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(endpoint = %config.endpoint, "Created OpenSearch store client");

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }
}

#[async_trait]
impl SearchStoreClient for OpenSearchStore {
    async fn template_exists(&self, name: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists_template(IndicesExistsTemplateParts::Name(&[name]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            status => Err(SearchError::template(format!(
                "Template existence check for '{}' returned status {}",
                name, status
            ))),
        }
    }

    async fn put_template(&self, name: &str, body: &Value) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .put_template(IndicesPutTemplateParts::Name(name))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            debug!(template = %name, "Template registered");
            return Ok(());
        }

        let error_body = response.text().await.unwrap_or_default();
        if error_body.contains(ALREADY_EXISTS_MARKER) {
            return Err(SearchError::already_exists(name));
        }

        error!(template = %name, status = %status, body = %error_body, "Put template failed");
        Err(SearchError::template(format!(
            "Put template '{}' failed with status {}: {}",
            name, status, error_body
        )))
    }

    async fn index_exists(&self, name: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            status => Err(SearchError::index_creation(format!(
                "Index existence check for '{}' returned status {}",
                name, status
            ))),
        }
    }

    async fn create_index(&self, name: &str) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            debug!(index = %name, "Index created");
            return Ok(());
        }

        let error_body = response.text().await.unwrap_or_default();
        if error_body.contains(ALREADY_EXISTS_MARKER) {
            return Err(SearchError::already_exists(name));
        }

        error!(index = %name, status = %status, body = %error_body, "Create index failed");
        Err(SearchError::index_creation(format!(
            "Create index '{}' failed with status {}: {}",
            name, status, error_body
        )))
    }

    async fn bulk_index(&self, documents: &[IndexableDocument]) -> Result<usize, SearchError> {
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);
        for doc in documents {
            body.push(json!({ "index": { "_index": doc.index() } }).into());
            let source = serde_json::to_value(doc.source())
                .map_err(|e| SearchError::serialization(e.to_string()))?;
            body.push(source.into());
        }

        let response = self
            .client
            .bulk(BulkParts::None)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchError::bulk_index(format!(
                "Bulk write failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::response(e.to_string()))?;

        // The bulk endpoint answers 200 even when individual items failed;
        // the batch contract is all-or-nothing, so item failures fail it.
        if response_body["errors"].as_bool().unwrap_or(false) {
            error!("Bulk response reported item failures");
            return Err(SearchError::bulk_index(
                "Bulk response reported item failures".to_string(),
            ));
        }

        debug!(count = documents.len(), "Bulk write acknowledged");
        Ok(documents.len())
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        Ok(response.status_code().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opensearch::template::access_log_template;

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let config = SearchStoreConfig::new("not a url");
        let result = OpenSearchStore::new(&config);

        assert!(matches!(result, Err(SearchError::ConnectionError(_))));
    }

    #[test]
    fn test_new_with_credentials() {
        let config =
            SearchStoreConfig::new("https://localhost:9200").with_credentials("user", "secret");

        assert!(OpenSearchStore::new(&config).is_ok());
    }

    #[test]
    fn test_template_body_is_valid_json_object() {
        // The body handed to put_template must be an object, not a scalar.
        assert!(access_log_template().is_object());
    }
}
