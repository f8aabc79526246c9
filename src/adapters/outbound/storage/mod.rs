// Infrastructure error conversion
pub mod error;

// Shared object_store plumbing
pub mod object_store_adapter;

// EventStore implementations
pub mod in_memory;
pub mod s3;

// Re-export key types
pub use in_memory::InMemoryEventStore;
pub use object_store_adapter::ObjectStoreAdapter;
pub use self::s3::{S3Config, S3ConnectError, S3EventStore};
