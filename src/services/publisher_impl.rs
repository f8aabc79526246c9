use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    domain::{
        errors::{ProvisioningError, PublishResult, StorageResult},
        models::{Element, ObjectInfo, StoredObject, EVENT_CONTENT_TYPE},
        value_objects::{BucketName, KeyPrefix, ObjectKey},
    },
    ports::{services::Publisher, storage::EventStore},
    services::{
        clock::MonotonicNanos,
        provisioning::{ensure_bucket, BucketStatus},
    },
};

/// Publishes elements as objects under `[<prefix>/]<client_id>/<unix_nanos>`.
///
/// Only obtainable through [`EventPublisher::connect`], so the bucket is
/// always provisioned before the first publish. Cheap to clone; clones share
/// the store and the clock.
#[derive(Clone)]
pub struct EventPublisher {
    store: Arc<dyn EventStore>,
    prefix: KeyPrefix,
    clock: Arc<MonotonicNanos>,
    status: BucketStatus,
}

impl EventPublisher {
    /// Provision the bucket in `region`, then return a ready publisher
    pub async fn connect(
        store: Arc<dyn EventStore>,
        region: &str,
        prefix: KeyPrefix,
    ) -> Result<Self, ProvisioningError> {
        let status = ensure_bucket(store.as_ref(), region).await?;

        Ok(Self {
            store,
            prefix,
            clock: Arc::new(MonotonicNanos::new()),
            status,
        })
    }

    pub fn bucket(&self) -> &BucketName {
        self.store.bucket()
    }

    pub fn prefix(&self) -> &KeyPrefix {
        &self.prefix
    }

    /// Whether connect created the bucket or found it already there
    pub fn bucket_status(&self) -> BucketStatus {
        self.status
    }
}

#[async_trait]
impl Publisher for EventPublisher {
    async fn publish(&self, element: Element) -> PublishResult<ObjectInfo> {
        let key = ObjectKey::for_event(&self.prefix, &element.client_id, self.clock.next())
            .map_err(|e| {
                warn!(client_id = %element.client_id, error = %e, "Rejected element");
                e
            })?;

        info!(name = %key, size = element.size(), "Put object");

        let info = self
            .store
            .put_object(&key, element.payload, EVENT_CONTENT_TYPE)
            .await
            .map_err(|e| {
                error!(bucket = %self.bucket(), key = %key, error = %e, "Upload failed");
                e
            })?;

        info!(
            bucket = %info.bucket,
            key = %info.key,
            size = info.size,
            "Successfully uploaded"
        );

        Ok(info)
    }

    async fn fetch(&self, key: &ObjectKey) -> StorageResult<StoredObject> {
        self.store.get_object(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::storage::InMemoryEventStore;

    async fn publisher(prefix: &str) -> EventPublisher {
        let store = InMemoryEventStore::new(BucketName::new("events").unwrap());
        EventPublisher::connect(Arc::new(store), "us-east-1", KeyPrefix::new(prefix))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_connect_creates_missing_bucket() {
        let publisher = publisher("").await;
        assert_eq!(publisher.bucket_status(), BucketStatus::Created);
        assert_eq!(publisher.bucket().as_str(), "events");
    }

    #[tokio::test]
    async fn test_key_layout() {
        let publisher = publisher("").await;
        let info = publisher
            .publish(Element::new("abc", "hello"))
            .await
            .unwrap();

        assert_eq!(info.key.parent(), Some("abc"));
        assert!(info.key.timestamp().is_some());
        assert_eq!(info.size, 5);
    }

    #[tokio::test]
    async fn test_invalid_client_id_is_rejected_before_upload() {
        let publisher = publisher("events").await;
        let err = publisher.publish(Element::new("", "hello")).await.unwrap_err();
        assert!(matches!(err, crate::domain::PublishError::InvalidKey(_)));
    }
}
