use async_trait::async_trait;
use bytes::Bytes;
use s3::{creds::Credentials, Bucket, BucketConfiguration};
use tracing::debug;

use crate::{
    adapters::outbound::storage::{
        error::{bucket_error, bucket_status_error},
        s3::{create_bucket_handle, create_s3_store, static_credentials, S3Config, S3ConnectError},
        ObjectStoreAdapter,
    },
    domain::{
        errors::StorageResult,
        models::{ObjectInfo, StoredObject},
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::EventStore,
};

/// EventStore backed by an S3-compatible endpoint (AWS S3, MinIO, ...)
pub struct S3EventStore {
    objects: ObjectStoreAdapter,
    bucket_handle: Box<Bucket>,
    config: S3Config,
    credentials: Credentials,
}

impl S3EventStore {
    /// Build the clients for `bucket`. Performs no network I/O; an
    /// unreachable endpoint surfaces on the first bucket or object call.
    pub fn connect(config: S3Config, bucket: BucketName) -> Result<Self, S3ConnectError> {
        let credentials = static_credentials(&config)?;
        let store = create_s3_store(&config, &bucket)?;
        let bucket_handle = create_bucket_handle(&config, &bucket, credentials.clone())?;

        debug!(
            endpoint = %config.endpoint_url(),
            bucket = %bucket,
            "S3 clients ready"
        );

        Ok(Self {
            objects: ObjectStoreAdapter::new(store, bucket),
            bucket_handle,
            config,
            credentials,
        })
    }

    pub fn config(&self) -> &S3Config {
        &self.config
    }
}

#[async_trait]
impl EventStore for S3EventStore {
    fn bucket(&self) -> &BucketName {
        self.objects.bucket()
    }

    async fn bucket_exists(&self) -> StorageResult<bool> {
        self.bucket_handle
            .exists()
            .await
            .map_err(|e| bucket_error("bucket_exists", self.bucket(), e))
    }

    async fn create_bucket(&self, region: &str) -> StorageResult<()> {
        let response = Bucket::create_with_path_style(
            self.bucket().as_str(),
            self.config.region_for(region),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await
        .map_err(|e| bucket_error("create_bucket", self.bucket(), e))?;

        if response.success() {
            Ok(())
        } else {
            Err(bucket_status_error(
                "create_bucket",
                self.bucket(),
                response.response_code,
                response.response_text,
            ))
        }
    }

    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<ObjectInfo> {
        self.objects.put(key, data, content_type).await
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<StoredObject> {
        self.objects.get(key).await
    }
}
