//! OpenSearch-backed search store implementation.

mod client;
pub mod template;

pub use client::OpenSearchStore;
