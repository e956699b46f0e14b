//! Abstract interfaces for the remote stores.

mod object_store_client;
mod search_store_client;

pub use object_store_client::ObjectStoreClient;
pub use search_store_client::SearchStoreClient;
