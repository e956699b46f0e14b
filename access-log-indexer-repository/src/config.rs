//! Configuration types for the search store connection.

use crate::opensearch::template::{DEFAULT_INDEX_NAME, DEFAULT_TEMPLATE_NAME};

/// Connection and naming configuration for the search store.
///
/// Credentials are supplied by the host environment; nothing in this crate
/// carries a default credential.
#[derive(Debug, Clone)]
pub struct SearchStoreConfig {
    /// The search store endpoint URL (e.g., "https://search.example.com:443").
    pub endpoint: String,
    /// The concrete index documents are written into.
    pub index_name: String,
    /// The index template name ensured before ingestion.
    pub template_name: String,
    /// Basic-auth username, if the endpoint requires authentication.
    pub username: Option<String>,
    /// Basic-auth password, if the endpoint requires authentication.
    pub password: Option<String>,
}

impl SearchStoreConfig {
    /// Create a config for the given endpoint with default index and
    /// template names and no credentials.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            username: None,
            password: None,
        }
    }

    /// Set the target index name.
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Set the template name.
    pub fn with_template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = template_name.into();
        self
    }

    /// Set the basic-auth credential pair.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}
