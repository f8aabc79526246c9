use async_trait::async_trait;
use bytes::Bytes;
use object_store::memory::InMemory;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    adapters::outbound::storage::ObjectStoreAdapter,
    domain::{
        errors::{StorageError, StorageResult},
        models::{ObjectInfo, StoredObject},
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::EventStore,
};

/// In-memory implementation of EventStore for testing and development.
///
/// Behaves like an S3 endpoint owned by the caller: creating an existing
/// bucket fails, and object calls fail until the bucket exists.
#[derive(Clone)]
pub struct InMemoryEventStore {
    objects: ObjectStoreAdapter,
    region: Arc<RwLock<Option<String>>>,
}

impl InMemoryEventStore {
    /// A store whose bucket has not been created yet
    pub fn new(bucket: BucketName) -> Self {
        Self {
            objects: ObjectStoreAdapter::new(Arc::new(InMemory::new()), bucket),
            region: Arc::new(RwLock::new(None)),
        }
    }

    /// A store whose bucket already exists in `region`
    pub fn with_existing_bucket(bucket: BucketName, region: &str) -> Self {
        Self {
            objects: ObjectStoreAdapter::new(Arc::new(InMemory::new()), bucket),
            region: Arc::new(RwLock::new(Some(region.to_string()))),
        }
    }

    /// Region the bucket was created in, if it exists
    pub async fn bucket_region(&self) -> Option<String> {
        self.region.read().await.clone()
    }

    /// Locations of every stored object, exactly as held by the store
    pub async fn stored_keys(&self) -> StorageResult<Vec<String>> {
        self.objects.locations().await
    }

    async fn require_bucket(&self) -> StorageResult<()> {
        if self.region.read().await.is_some() {
            Ok(())
        } else {
            Err(StorageError::BucketNotFound {
                bucket: self.objects.bucket().clone(),
            })
        }
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    fn bucket(&self) -> &BucketName {
        self.objects.bucket()
    }

    async fn bucket_exists(&self) -> StorageResult<bool> {
        Ok(self.region.read().await.is_some())
    }

    async fn create_bucket(&self, region: &str) -> StorageResult<()> {
        let mut current = self.region.write().await;
        if current.is_some() {
            return Err(StorageError::BucketAlreadyExists {
                bucket: self.objects.bucket().clone(),
            });
        }
        *current = Some(region.to_string());
        Ok(())
    }

    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<ObjectInfo> {
        self.require_bucket().await?;
        self.objects.put(key, data, content_type).await
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<StoredObject> {
        self.require_bucket().await?;
        self.objects.get(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket() -> BucketName {
        BucketName::new("events").unwrap()
    }

    #[tokio::test]
    async fn test_create_bucket_once() {
        let store = InMemoryEventStore::new(bucket());
        assert!(!store.bucket_exists().await.unwrap());

        store.create_bucket("eu-west-1").await.unwrap();
        assert!(store.bucket_exists().await.unwrap());
        assert_eq!(store.bucket_region().await.as_deref(), Some("eu-west-1"));

        let err = store.create_bucket("eu-west-1").await.unwrap_err();
        assert!(matches!(err, StorageError::BucketAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_put_requires_bucket() {
        let store = InMemoryEventStore::new(bucket());
        let key = ObjectKey::new("abc/1").unwrap();

        let err = store
            .put_object(&key, Bytes::from_static(b"hello"), "text/plain")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::BucketNotFound { .. }));
    }

    #[tokio::test]
    async fn test_put_get_keeps_content_type() {
        let store = InMemoryEventStore::with_existing_bucket(bucket(), "us-east-1");
        let key = ObjectKey::new("abc/1").unwrap();

        let info = store
            .put_object(&key, Bytes::from_static(b"hello"), "text/plain")
            .await
            .unwrap();
        assert_eq!(info.size, 5);
        assert_eq!(info.bucket, bucket());

        let stored = store.get_object(&key).await.unwrap();
        assert_eq!(stored.data, Bytes::from_static(b"hello"));
        assert_eq!(stored.content_type.as_deref(), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_get_missing_object() {
        let store = InMemoryEventStore::with_existing_bucket(bucket(), "us-east-1");
        let key = ObjectKey::new("abc/404").unwrap();

        let err = store.get_object(&key).await.unwrap_err();
        assert!(matches!(err, StorageError::ObjectNotFound { .. }));
    }
}
