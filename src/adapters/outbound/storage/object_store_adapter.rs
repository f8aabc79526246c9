use bytes::Bytes;
use futures::TryStreamExt;
use object_store::{
    path::Path as ObjectPath, Attribute, Attributes, ObjectStore as ApacheObjectStore,
    PutOptions, PutPayload,
};
use std::sync::Arc;

use crate::{
    adapters::outbound::storage::error::object_store_error,
    domain::{
        errors::{StorageError, StorageResult},
        models::{ObjectInfo, StoredObject},
        value_objects::{BucketName, ObjectKey},
    },
};

/// Object reads and writes through Apache object_store, shared by every
/// EventStore implementation. Bucket management is not part of object_store
/// and stays with the adapters.
#[derive(Clone)]
pub struct ObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
    bucket: BucketName,
}

impl ObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>, bucket: BucketName) -> Self {
        Self {
            inner: store,
            bucket,
        }
    }

    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    /// Location of `key` in the store, taken verbatim (no percent-encoding)
    fn location(operation: &str, key: &ObjectKey) -> StorageResult<ObjectPath> {
        ObjectPath::parse(key.as_str()).map_err(|e| object_store_error(operation, key, e.into()))
    }

    pub async fn put(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<ObjectInfo> {
        let path = Self::location("put_object", key)?;
        let size = data.len() as u64;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let result = self
            .inner
            .put_opts(&path, PutPayload::from(data), opts)
            .await
            .map_err(|e| object_store_error("put_object", key, e))?;

        Ok(ObjectInfo {
            bucket: self.bucket.clone(),
            key: key.clone(),
            size,
            etag: result.e_tag,
            version_id: result.version,
        })
    }

    pub async fn get(&self, key: &ObjectKey) -> StorageResult<StoredObject> {
        let path = Self::location("get_object", key)?;

        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|e| object_store_error("get_object", key, e))?;

        let content_type = result
            .attributes
            .get(&Attribute::ContentType)
            .map(|value| value.to_string());

        let data = result
            .bytes()
            .await
            .map_err(|e| object_store_error("get_object", key, e))?;

        Ok(StoredObject {
            key: key.clone(),
            data,
            content_type,
        })
    }

    /// Every stored location, sorted
    pub async fn locations(&self) -> StorageResult<Vec<String>> {
        let mut locations: Vec<String> = self
            .inner
            .list(None)
            .map_ok(|meta| meta.location.to_string())
            .try_collect()
            .await
            .map_err(|e| StorageError::BackendError {
                operation: "list_objects".to_string(),
                message: e.to_string(),
            })?;

        locations.sort();
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn adapter() -> (Arc<InMemory>, ObjectStoreAdapter) {
        let store = Arc::new(InMemory::new());
        let adapter = ObjectStoreAdapter::new(store.clone(), BucketName::new("events").unwrap());
        (store, adapter)
    }

    #[tokio::test]
    async fn test_key_is_stored_verbatim() {
        let (store, adapter) = adapter();

        for raw in ["sensor#1/42", "a%b/42", "dev[1]/42", "mqtt/a b/42"] {
            let key = ObjectKey::new(raw).unwrap();
            let info = adapter
                .put(&key, Bytes::from_static(b"hello"), "text/plain")
                .await
                .unwrap();
            assert_eq!(info.key.as_str(), raw);

            let meta = store.head(&ObjectPath::parse(raw).unwrap()).await.unwrap();
            assert_eq!(meta.location.as_ref(), raw);
        }

        assert_eq!(
            adapter.locations().await.unwrap(),
            vec!["a%b/42", "dev[1]/42", "mqtt/a b/42", "sensor#1/42"]
        );
    }

    #[tokio::test]
    async fn test_get_reads_the_verbatim_location() {
        let (store, adapter) = adapter();
        let key = ObjectKey::new("sensor#1/42").unwrap();

        store
            .put(&ObjectPath::parse("sensor#1/42").unwrap(), "raw".into())
            .await
            .unwrap();

        let stored = adapter.get(&key).await.unwrap();
        assert_eq!(stored.data.as_ref(), b"raw");
        assert_eq!(stored.content_type, None);
    }
}
