use tracing::{error, info, warn};

use crate::{domain::errors::ProvisioningError, ports::storage::EventStore};

/// How the target bucket came to be ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    Created,
    AlreadyOwned,
}

/// Make sure the store's bucket exists, creating it in `region` if needed.
///
/// A failed create followed by a successful existence check is treated as
/// success, so running this again against a bucket we own is harmless.
/// There is no retry.
pub async fn ensure_bucket(
    store: &dyn EventStore,
    region: &str,
) -> Result<BucketStatus, ProvisioningError> {
    let bucket = store.bucket();

    let create = match store.create_bucket(region).await {
        Ok(()) => {
            info!(bucket = %bucket, region, "Successfully created bucket");
            return Ok(BucketStatus::Created);
        }
        Err(e) => e,
    };

    match store.bucket_exists().await {
        Ok(true) => {
            info!(bucket = %bucket, "We already own bucket");
            Ok(BucketStatus::AlreadyOwned)
        }
        Ok(false) => {
            error!(bucket = %bucket, error = %create, "Bucket could not be created");
            Err(ProvisioningError::NotOwned {
                bucket: bucket.clone(),
                create,
            })
        }
        Err(check) => {
            warn!(bucket = %bucket, error = %check, "Bucket existence check failed");
            error!(bucket = %bucket, error = %create, "Bucket could not be created");
            Err(ProvisioningError::ExistenceCheckFailed {
                bucket: bucket.clone(),
                create,
                check,
            })
        }
    }
}
