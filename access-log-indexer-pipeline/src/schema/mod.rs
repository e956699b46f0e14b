//! Schema manager for the ingestion pipeline.
//!
//! Idempotently ensures the index template and the concrete index exist
//! before any write. Both checks run on every invocation; invocations share
//! no memory, so there is no process-wide "already initialized" flag, and
//! safety under concurrent invocations comes from the store's idempotent
//! creation semantics alone.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::{PipelineError, SchemaStage};
use access_log_indexer_repository::opensearch::template::access_log_template;
use access_log_indexer_repository::{SearchError, SearchStoreClient};

/// Ensures the destination schema exists before ingestion.
pub struct SchemaManager {
    client: Arc<dyn SearchStoreClient>,
    template_name: String,
    index_name: String,
}

impl SchemaManager {
    /// Create a schema manager for the given template and index names.
    pub fn new(
        client: Arc<dyn SearchStoreClient>,
        template_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            template_name: template_name.into(),
            index_name: index_name.into(),
        }
    }

    /// Ensure the index template is registered.
    ///
    /// Check-then-create: a concurrent invocation may create the template
    /// between our check and our create, so a create answered with
    /// "already exists" is success, not an error. Any other failure is
    /// fatal and tagged with the template stage.
    #[instrument(skip(self), fields(template = %self.template_name))]
    pub async fn ensure_template(&self) -> Result<(), PipelineError> {
        let exists = self
            .client
            .template_exists(&self.template_name)
            .await
            .map_err(|e| PipelineError::schema(SchemaStage::Template, e))?;

        if exists {
            debug!("Template already registered");
            return Ok(());
        }

        match self
            .client
            .put_template(&self.template_name, &access_log_template())
            .await
        {
            Ok(()) => {
                info!("Registered index template");
                Ok(())
            }
            Err(SearchError::AlreadyExists(_)) => {
                debug!("Template registered by a concurrent invocation");
                Ok(())
            }
            Err(e) => Err(PipelineError::schema(SchemaStage::Template, e)),
        }
    }

    /// Ensure the concrete index exists.
    ///
    /// Same check-then-create idempotency as [`ensure_template`]; failures
    /// are tagged with the index stage.
    ///
    /// [`ensure_template`]: SchemaManager::ensure_template
    #[instrument(skip(self), fields(index = %self.index_name))]
    pub async fn ensure_index(&self) -> Result<(), PipelineError> {
        let exists = self
            .client
            .index_exists(&self.index_name)
            .await
            .map_err(|e| PipelineError::schema(SchemaStage::Index, e))?;

        if exists {
            debug!("Index already exists");
            return Ok(());
        }

        match self.client.create_index(&self.index_name).await {
            Ok(()) => {
                info!("Created index");
                Ok(())
            }
            Err(SearchError::AlreadyExists(_)) => {
                debug!("Index created by a concurrent invocation");
                Ok(())
            }
            Err(e) => Err(PipelineError::schema(SchemaStage::Index, e)),
        }
    }

    /// The index name this manager ensures.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use access_log_indexer_shared::IndexableDocument;

    /// Stub store that fails on duplicate create.
    struct StubStore {
        has_template: AtomicBool,
        has_index: AtomicBool,
        put_template_calls: AtomicUsize,
        create_index_calls: AtomicUsize,
        /// Answer the next create with an already-exists race, regardless
        /// of what the existence check said.
        race_on_create: bool,
    }

    impl StubStore {
        fn new() -> Self {
            Self {
                has_template: AtomicBool::new(false),
                has_index: AtomicBool::new(false),
                put_template_calls: AtomicUsize::new(0),
                create_index_calls: AtomicUsize::new(0),
                race_on_create: false,
            }
        }

        fn racing() -> Self {
            Self {
                race_on_create: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SearchStoreClient for StubStore {
        async fn template_exists(&self, _name: &str) -> Result<bool, SearchError> {
            Ok(self.has_template.load(Ordering::SeqCst))
        }

        async fn put_template(&self, name: &str, _body: &Value) -> Result<(), SearchError> {
            self.put_template_calls.fetch_add(1, Ordering::SeqCst);
            if self.race_on_create || self.has_template.load(Ordering::SeqCst) {
                return Err(SearchError::already_exists(name));
            }
            self.has_template.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn index_exists(&self, _name: &str) -> Result<bool, SearchError> {
            Ok(self.has_index.load(Ordering::SeqCst))
        }

        async fn create_index(&self, name: &str) -> Result<(), SearchError> {
            self.create_index_calls.fetch_add(1, Ordering::SeqCst);
            if self.race_on_create || self.has_index.load(Ordering::SeqCst) {
                return Err(SearchError::already_exists(name));
            }
            self.has_index.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn bulk_index(&self, _documents: &[IndexableDocument]) -> Result<usize, SearchError> {
            Ok(0)
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    fn manager(store: Arc<StubStore>) -> SchemaManager {
        SchemaManager::new(store, "access_logs_template", "access-logs-index-1")
    }

    #[tokio::test]
    async fn test_ensure_template_creates_once() {
        let store = Arc::new(StubStore::new());
        let schema = manager(store.clone());

        schema.ensure_template().await.unwrap();
        schema.ensure_template().await.unwrap();

        // The second call saw the template and performed no create.
        assert_eq!(store.put_template_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_index_creates_once() {
        let store = Arc::new(StubStore::new());
        let schema = manager(store.clone());

        schema.ensure_index().await.unwrap();
        schema.ensure_index().await.unwrap();

        assert_eq!(store.create_index_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_template_tolerates_creation_race() {
        // The check says absent, but a concurrent invocation wins the
        // create; that is success, not an error.
        let store = Arc::new(StubStore::racing());
        let schema = manager(store.clone());

        schema.ensure_template().await.unwrap();
        assert_eq!(store.put_template_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_index_tolerates_creation_race() {
        let store = Arc::new(StubStore::racing());
        let schema = manager(store.clone());

        schema.ensure_index().await.unwrap();
        assert_eq!(store.create_index_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_template_surfaces_fatal_failure() {
        struct FailingStore;

        #[async_trait]
        impl SearchStoreClient for FailingStore {
            async fn template_exists(&self, _name: &str) -> Result<bool, SearchError> {
                Err(SearchError::connection("refused"))
            }
            async fn put_template(&self, _name: &str, _body: &Value) -> Result<(), SearchError> {
                unreachable!("existence check already failed")
            }
            async fn index_exists(&self, _name: &str) -> Result<bool, SearchError> {
                Ok(false)
            }
            async fn create_index(&self, _name: &str) -> Result<(), SearchError> {
                Err(SearchError::index_creation("permission denied"))
            }
            async fn bulk_index(
                &self,
                _documents: &[IndexableDocument],
            ) -> Result<usize, SearchError> {
                Ok(0)
            }
            async fn health_check(&self) -> Result<bool, SearchError> {
                Ok(false)
            }
        }

        let schema = SchemaManager::new(Arc::new(FailingStore), "t", "i");

        let err = schema.ensure_template().await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::SchemaError {
                stage: SchemaStage::Template,
                ..
            }
        ));

        let err = schema.ensure_index().await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::SchemaError {
                stage: SchemaStage::Index,
                ..
            }
        ));
    }
}
