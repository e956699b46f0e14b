//! S3-backed object store implementation.

mod client;

pub use client::S3ObjectStore;
