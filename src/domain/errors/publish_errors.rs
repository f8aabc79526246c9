use crate::domain::{
    errors::{StorageError, ValidationError},
    value_objects::BucketName,
};

/// Failure to establish the target bucket during start-up
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProvisioningError {
    #[error("Failed to create bucket {bucket} ({create}) and it is not owned by the caller")]
    NotOwned {
        bucket: BucketName,
        create: StorageError,
    },

    #[error("Failed to create bucket {bucket} ({create}); existence check also failed: {check}")]
    ExistenceCheckFailed {
        bucket: BucketName,
        create: StorageError,
        check: StorageError,
    },
}

/// Failure of a single publish call. Never fatal to the process.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PublishError {
    #[error("Invalid object key: {0}")]
    InvalidKey(#[from] ValidationError),

    #[error("Upload failed: {0}")]
    Upload(#[from] StorageError),
}

pub type PublishResult<T> = Result<T, PublishError>;
