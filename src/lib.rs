pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - events, keys and errors
pub use domain::{
    BucketName, DomainValidationError, Element, KeyPrefix, NanoTimestamp, ObjectInfo, ObjectKey,
    ProvisioningError, PublishError, StorageError, StoredObject,
};

// Port types - interfaces for external systems
pub use ports::{EventStore, Publisher};

// Service implementations
pub use services::{ensure_bucket, BucketStatus, EventPublisher};

// Application factory and configuration
pub use app::{
    create_in_memory_publisher, create_publisher_from_file, AppBuilder, AppError, StorageBackend,
    StorageConfig, DEFAULT_CONFIG_PATH,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{InMemoryEventStore, S3Config, S3EventStore};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_publisher, create_publisher_from_file, AppBuilder, BucketName, Element,
        EventPublisher, EventStore, InMemoryEventStore, ObjectKey, Publisher, S3EventStore,
        StorageConfig,
    };
}
