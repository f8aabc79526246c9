use serde::{
    de::{self, Unexpected},
    Deserialize, Serialize,
};
use serde_json::Value;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

use crate::{
    adapters::outbound::storage::{InMemoryEventStore, S3Config, S3EventStore},
    domain::{
        errors::{ProvisioningError, ValidationError},
        value_objects::{BucketName, KeyPrefix},
    },
    ports::storage::EventStore,
    services::EventPublisher,
};

/// Where the bridge looks for its storage settings unless told otherwise
pub const DEFAULT_CONFIG_PATH: &str = "./plugins/minio/minio.json";

/// Region used when the config leaves it empty
pub const DEFAULT_REGION: &str = "us-east-1";

/// Storage settings, read once from a JSON file at start-up.
///
/// Every key is optional; missing strings are empty and `ssl` defaults to
/// `true`.
///
/// ```json
/// {"endpoint": "localhost:9000", "region": "us-east-1", "ak": "minioadmin",
///  "sk": "minioadmin", "ssl": false, "bucket": "events", "path": "mqtt"}
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub endpoint: String,
    pub region: String,
    #[serde(rename = "ak")]
    pub access_key_id: String,
    #[serde(rename = "sk")]
    pub secret_access_key: String,
    pub ssl: bool,
    pub bucket: String,
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            region: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            ssl: true,
            bucket: String::new(),
            path: String::new(),
        }
    }
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("ssl", &self.ssl)
            .field("bucket", &self.bucket)
            .field("path", &self.path)
            .finish()
    }
}

impl StorageConfig {
    /// Read and decode the config file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a config document. Only a JSON object is accepted; serde would
    /// otherwise map an array onto the fields by position.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Object(_) => serde_json::from_value(value),
            other => Err(de::Error::invalid_type(unexpected(&other), &"a JSON object")),
        }
    }

    /// Configured region, or `us-east-1` when empty
    pub fn region(&self) -> &str {
        let region = self.region.trim();
        if region.is_empty() {
            DEFAULT_REGION
        } else {
            region
        }
    }

    pub fn bucket_name(&self) -> Result<BucketName, ValidationError> {
        BucketName::new(self.bucket.trim())
    }

    pub fn key_prefix(&self) -> KeyPrefix {
        KeyPrefix::new(&self.path)
    }

    pub fn s3_config(&self) -> S3Config {
        S3Config {
            endpoint: self.endpoint.trim().to_string(),
            region: self.region().to_string(),
            access_key: self.access_key_id.clone(),
            secret_key: self.secret_access_key.clone(),
            secure: self.ssl,
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-local store, for tests and dry runs
    InMemory,
    #[default]
    S3,
}

/// Builds a connected, provisioned publisher from a StorageConfig
pub struct AppBuilder {
    config: StorageConfig,
    backend: StorageBackend,
}

impl AppBuilder {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            backend: StorageBackend::default(),
        }
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Create the storage adapter without touching the network
    pub fn build_store(&self) -> Result<Arc<dyn EventStore>, AppError> {
        let bucket = self
            .config
            .bucket_name()
            .map_err(|e| AppError::Connection {
                message: format!("invalid bucket name {:?}: {}", self.config.bucket, e),
            })?;

        match self.backend {
            StorageBackend::InMemory => Ok(Arc::new(InMemoryEventStore::new(bucket))),
            StorageBackend::S3 => {
                let store = S3EventStore::connect(self.config.s3_config(), bucket).map_err(|e| {
                    AppError::Connection {
                        message: e.to_string(),
                    }
                })?;
                Ok(Arc::new(store))
            }
        }
    }

    /// Connect and provision the bucket
    pub async fn build(self) -> Result<EventPublisher, AppError> {
        let store = self.build_store()?;

        info!(
            endpoint = %self.config.endpoint,
            bucket = %store.bucket(),
            backend = ?self.backend,
            "Connecting to object storage"
        );

        let publisher =
            EventPublisher::connect(store, self.config.region(), self.config.key_prefix()).await?;
        Ok(publisher)
    }
}

/// Application-level errors. All of them are fatal at start-up.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Bucket provisioning error: {0}")]
    Provisioning(#[from] ProvisioningError),
}

/// Load the config at `path` and build an S3-backed publisher
pub async fn create_publisher_from_file(path: impl AsRef<Path>) -> Result<EventPublisher, AppError> {
    let config = StorageConfig::load(path)?;
    AppBuilder::new(config).build().await
}

/// Create an in-memory publisher for testing and development
pub async fn create_in_memory_publisher(
    bucket: &str,
    prefix: &str,
) -> Result<EventPublisher, AppError> {
    let config = StorageConfig {
        bucket: bucket.to_string(),
        path: prefix.to_string(),
        ..StorageConfig::default()
    };

    AppBuilder::new(config)
        .with_storage_backend(StorageBackend::InMemory)
        .build()
        .await
}
