use crate::domain::value_objects::{BucketName, ObjectKey};

/// Errors that can occur during storage operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Object not found: {key}")]
    ObjectNotFound { key: ObjectKey },

    #[error("Bucket not found: {bucket}")]
    BucketNotFound { bucket: BucketName },

    /// Create refused because the bucket is already there
    #[error("Bucket already exists: {bucket}")]
    BucketAlreadyExists { bucket: BucketName },

    #[error("Access denied for '{operation}' on bucket {bucket}")]
    AccessDenied {
        bucket: BucketName,
        operation: String,
    },

    /// The backend answered with a non-success status
    #[error("Storage service returned {status_code} for '{operation}': {message}")]
    ServiceError {
        operation: String,
        status_code: u16,
        message: String,
    },

    /// Transport or client-side failure talking to the backend
    #[error("Storage backend error during '{operation}': {message}")]
    BackendError { operation: String, message: String },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
