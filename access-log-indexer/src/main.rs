//! Access log indexer entry point.
//!
//! Reads an S3 notification event from a file argument (or stdin), runs
//! the ingestion pipeline for every record, and exits non-zero on any
//! fatal stage failure so the host can redeliver the event.

use std::env;
use std::io::Read;

use tracing::info;
use tracing_subscriber::EnvFilter;

use access_log_indexer::{Dependencies, IndexingError};
use access_log_indexer_shared::ObjectCreatedEvent;

#[tokio::main]
async fn main() -> Result<(), IndexingError> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let event = read_event()?;
    info!(records = event.records.len(), "Received trigger event");

    let deps = Dependencies::new().await?;
    let reports = deps.pipeline.run(&event).await?;

    for report in &reports {
        info!(
            bucket = %report.bucket,
            key = %report.key,
            indexed = report.indexed,
            parse_failures = report.parse_failures.len(),
            "Ingestion complete"
        );
    }

    Ok(())
}

/// Read the trigger event JSON from the first argument or stdin.
fn read_event() -> Result<ObjectCreatedEvent, IndexingError> {
    let raw = match env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    serde_json::from_str(&raw).map_err(|e| IndexingError::event(format!("Invalid payload: {}", e)))
}
