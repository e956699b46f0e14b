//! S3 trigger event payload.
//!
//! The host delivers an S3 "object created" notification naming the bucket
//! and key of each new access log object. A notification can carry multiple
//! records; the pipeline processes every one of them.

use percent_encoding::percent_decode_str;
use serde::Deserialize;

/// An S3 object-created notification, as delivered by the trigger host.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectCreatedEvent {
    /// The records of the notification, one per new object.
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

/// One record of an S3 notification.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    /// The S3 payload of the record.
    pub s3: S3Entity,
}

/// Bucket and object identification inside a notification record.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    /// The bucket the object landed in.
    pub bucket: BucketEntity,
    /// The object itself.
    pub object: ObjectEntity,
}

/// Bucket identification.
#[derive(Debug, Clone, Deserialize)]
pub struct BucketEntity {
    /// The bucket name.
    pub name: String,
}

/// Object identification.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntity {
    /// The object key, URL-encoded by the notification format.
    pub key: String,
}

impl ObjectEntity {
    /// The object key with notification encoding undone.
    ///
    /// Notification keys encode spaces as `+` on top of percent-encoding,
    /// so `+` is restored before percent-decoding.
    pub fn decoded_key(&self) -> String {
        let plus_decoded = self.key.replace('+', " ");
        percent_decode_str(&plus_decoded)
            .decode_utf8_lossy()
            .into_owned()
    }
}
