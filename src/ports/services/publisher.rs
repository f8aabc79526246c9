use crate::domain::{
    errors::{PublishResult, StorageResult},
    models::{Element, ObjectInfo, StoredObject},
    value_objects::ObjectKey,
};
use async_trait::async_trait;

/// Port for publishing events into object storage
#[async_trait]
pub trait Publisher: Send + Sync + 'static {
    /// Upload one element as a new object keyed by client and timestamp
    async fn publish(&self, element: Element) -> PublishResult<ObjectInfo>;

    /// Read back a previously published object
    async fn fetch(&self, key: &ObjectKey) -> StorageResult<StoredObject>;
}
