use bytes::Bytes;

use crate::domain::value_objects::{BucketName, ObjectKey};

/// Content type every event object is tagged with
pub const EVENT_CONTENT_TYPE: &str = "text/plain";

/// Outcome of a successful upload
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    pub bucket: BucketName,
    pub key: ObjectKey,
    pub size: u64,
    pub etag: Option<String>,
    pub version_id: Option<String>,
}

/// An object read back from storage
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: ObjectKey,
    pub data: Bytes,
    pub content_type: Option<String>,
}
