use crate::domain::{
    errors::StorageResult,
    models::{ObjectInfo, StoredObject},
    value_objects::{BucketName, ObjectKey},
};
use async_trait::async_trait;
use bytes::Bytes;

/// Port for the storage capabilities the publisher needs.
/// An implementation is bound to a single bucket for its whole lifetime.
#[async_trait]
pub trait EventStore: Send + Sync + 'static {
    /// The bucket every operation targets
    fn bucket(&self) -> &BucketName;

    /// Check whether the bucket exists and is visible to our credentials
    async fn bucket_exists(&self) -> StorageResult<bool>;

    /// Create the bucket in the given region.
    /// Fails if the bucket already exists, whoever owns it.
    async fn create_bucket(&self, region: &str) -> StorageResult<()>;

    /// Store object data as a new object
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<ObjectInfo>;

    /// Retrieve object data
    async fn get_object(&self, key: &ObjectKey) -> StorageResult<StoredObject>;
}
