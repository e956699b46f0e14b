//! Batch indexer for the ingestion pipeline.
//!
//! Performs the single bulk write of an invocation. There is no chunking,
//! retry, or backoff here: the trigger event is the unit of retry, and the
//! host redelivers it on failure.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::PipelineError;
use access_log_indexer_repository::SearchStoreClient;
use access_log_indexer_shared::IndexableDocument;

/// Outcome of one bulk write.
///
/// A batch is never partially acknowledged: either every document was
/// written and `indexed` counts them, or the submit call failed as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Number of documents written.
    pub indexed: usize,
}

/// Indexer that writes a batch of documents in one bulk call.
pub struct BatchIndexer {
    client: Arc<dyn SearchStoreClient>,
}

impl BatchIndexer {
    /// Create a batch indexer backed by the given store client.
    pub fn new(client: Arc<dyn SearchStoreClient>) -> Self {
        Self { client }
    }

    /// Submit all documents as one bulk write.
    ///
    /// An empty batch is a legal no-op: it succeeds with a zero count and
    /// issues no network call.
    #[instrument(skip(self, documents), fields(count = documents.len()))]
    pub async fn submit(
        &self,
        documents: Vec<IndexableDocument>,
    ) -> Result<BatchResult, PipelineError> {
        if documents.is_empty() {
            debug!("Empty batch, nothing to index");
            return Ok(BatchResult { indexed: 0 });
        }

        let indexed = self
            .client
            .bulk_index(&documents)
            .await
            .map_err(PipelineError::IndexError)?;

        info!(indexed, "Bulk write acknowledged");
        Ok(BatchResult { indexed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use access_log_indexer_repository::SearchError;
    use access_log_indexer_shared::{LogRecord, ACCESS_LOG_FIELDS};

    struct MockStore {
        bulk_calls: AtomicUsize,
        indexed: AtomicUsize,
        fail_bulk: bool,
    }

    impl MockStore {
        fn new(fail_bulk: bool) -> Self {
            Self {
                bulk_calls: AtomicUsize::new(0),
                indexed: AtomicUsize::new(0),
                fail_bulk,
            }
        }
    }

    #[async_trait]
    impl SearchStoreClient for MockStore {
        async fn template_exists(&self, _name: &str) -> Result<bool, SearchError> {
            Ok(true)
        }
        async fn put_template(&self, _name: &str, _body: &Value) -> Result<(), SearchError> {
            Ok(())
        }
        async fn index_exists(&self, _name: &str) -> Result<bool, SearchError> {
            Ok(true)
        }
        async fn create_index(&self, _name: &str) -> Result<(), SearchError> {
            Ok(())
        }
        async fn bulk_index(&self, documents: &[IndexableDocument]) -> Result<usize, SearchError> {
            self.bulk_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_bulk {
                return Err(SearchError::connection("store unreachable"));
            }
            self.indexed.fetch_add(documents.len(), Ordering::SeqCst);
            Ok(documents.len())
        }
        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    fn document() -> IndexableDocument {
        let values: Vec<Option<&str>> =
            (0..ACCESS_LOG_FIELDS.len()).map(|_| Some("v")).collect();
        IndexableDocument::new(
            "access-logs-index-1",
            LogRecord::from_values(values).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_submit_empty_batch_is_local_noop() {
        let store = Arc::new(MockStore::new(false));
        let indexer = BatchIndexer::new(store.clone());

        let result = indexer.submit(Vec::new()).await.unwrap();

        assert_eq!(result.indexed, 0);
        // No network call was issued for the empty batch.
        assert_eq!(store.bulk_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_counts_documents() {
        let store = Arc::new(MockStore::new(false));
        let indexer = BatchIndexer::new(store.clone());

        let result = indexer
            .submit(vec![document(), document(), document()])
            .await
            .unwrap();

        assert_eq!(result.indexed, 3);
        assert_eq!(store.bulk_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.indexed.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_submit_failure_is_all_or_nothing() {
        let store = Arc::new(MockStore::new(true));
        let indexer = BatchIndexer::new(store.clone());

        let err = indexer.submit(vec![document(), document()]).await.unwrap_err();

        assert!(matches!(err, PipelineError::IndexError(_)));
        // Nothing is reported as indexed on failure.
        assert_eq!(store.indexed.load(Ordering::SeqCst), 0);
    }
}
