//! S3 storage adapter
//!
//! Object reads and writes go through the object_store crate. Bucket
//! creation and existence checks go through rust-s3, since object_store
//! only addresses objects inside an existing bucket.

pub mod s3_adapter;

pub use s3_adapter::S3EventStore;

use object_store::{aws::AmazonS3Builder, ObjectStore as ObjectStoreBackend};
use s3::{creds::Credentials, error::S3Error, Bucket, Region};
use std::sync::Arc;

use crate::domain::value_objects::BucketName;

/// Connection settings for an S3-compatible endpoint
#[derive(Debug, Clone)]
pub struct S3Config {
    /// `host:port`, or a full URL with scheme
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    /// Use https when the endpoint carries no scheme
    pub secure: bool,
}

impl S3Config {
    /// Base URL of the endpoint, e.g. `https://minio.local:9000`
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            return self.endpoint.trim_end_matches('/').to_string();
        }

        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}", scheme, self.endpoint.trim_end_matches('/'))
    }

    /// rust-s3 region pointing at this endpoint
    pub fn region_for(&self, region: &str) -> Region {
        Region::Custom {
            region: region.to_string(),
            endpoint: self.endpoint_url(),
        }
    }
}

/// Errors building the S3 clients. Nothing is sent over the network here.
#[derive(Debug, thiserror::Error)]
pub enum S3ConnectError {
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    #[error("Failed to build object client: {0}")]
    ObjectClient(#[from] object_store::Error),

    #[error("Failed to build bucket client: {0}")]
    BucketClient(#[from] S3Error),
}

/// Static access-key credentials, no session token
pub fn static_credentials(config: &S3Config) -> Result<Credentials, S3ConnectError> {
    Credentials::new(
        Some(config.access_key.as_str()),
        Some(config.secret_key.as_str()),
        None,
        None,
        None,
    )
    .map_err(|e| S3ConnectError::Credentials(e.to_string()))
}

/// Create an object_store client bound to `bucket`
pub fn create_s3_store(
    config: &S3Config,
    bucket: &BucketName,
) -> Result<Arc<dyn ObjectStoreBackend>, S3ConnectError> {
    let endpoint = config.endpoint_url();

    let store = AmazonS3Builder::new()
        .with_allow_http(endpoint.starts_with("http://"))
        .with_endpoint(endpoint)
        .with_region(&config.region)
        .with_bucket_name(bucket.as_str())
        .with_access_key_id(&config.access_key)
        .with_secret_access_key(&config.secret_key)
        .build()?;

    Ok(Arc::new(store))
}

/// Create a path-style rust-s3 bucket handle for bucket-level calls
pub fn create_bucket_handle(
    config: &S3Config,
    bucket: &BucketName,
    credentials: Credentials,
) -> Result<Box<Bucket>, S3ConnectError> {
    let handle = Bucket::new(bucket.as_str(), config.region_for(&config.region), credentials)?;
    Ok(handle.with_path_style())
}
