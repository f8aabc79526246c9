use crate::domain::{
    errors::StorageError,
    value_objects::{BucketName, ObjectKey},
};
use s3::error::S3Error;

/// Convert an object_store failure on `key` into a domain storage error
pub(crate) fn object_store_error(
    operation: &str,
    key: &ObjectKey,
    err: object_store::Error,
) -> StorageError {
    match err {
        object_store::Error::NotFound { .. } => StorageError::ObjectNotFound { key: key.clone() },
        _ => StorageError::BackendError {
            operation: operation.to_string(),
            message: err.to_string(),
        },
    }
}

/// Convert a rust-s3 transport failure on a bucket-level call. Without the
/// `fail-on-err` feature non-2xx responses arrive as `Ok` and go through
/// [`bucket_status_error`] instead.
pub(crate) fn bucket_error(operation: &str, bucket: &BucketName, err: S3Error) -> StorageError {
    StorageError::BackendError {
        operation: operation.to_string(),
        message: format!("bucket {}: {}", bucket, err),
    }
}

/// Map a non-success HTTP status from a bucket-level call
pub(crate) fn bucket_status_error(
    operation: &str,
    bucket: &BucketName,
    status_code: u16,
    body: String,
) -> StorageError {
    match status_code {
        // BucketAlreadyExists / BucketAlreadyOwnedByYou
        409 => StorageError::BucketAlreadyExists {
            bucket: bucket.clone(),
        },
        403 => StorageError::AccessDenied {
            bucket: bucket.clone(),
            operation: operation.to_string(),
        },
        404 => StorageError::BucketNotFound {
            bucket: bucket.clone(),
        },
        _ => StorageError::ServiceError {
            operation: operation.to_string(),
            status_code,
            message: body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket() -> BucketName {
        BucketName::new("events").unwrap()
    }

    #[test]
    fn test_bucket_status_mapping() {
        assert!(matches!(
            bucket_status_error("create_bucket", &bucket(), 409, String::new()),
            StorageError::BucketAlreadyExists { .. }
        ));
        assert!(matches!(
            bucket_status_error("create_bucket", &bucket(), 403, String::new()),
            StorageError::AccessDenied { .. }
        ));
        match bucket_status_error("create_bucket", &bucket(), 500, "boom".to_string()) {
            StorageError::ServiceError {
                status_code,
                message,
                ..
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_is_backend_error() {
        match bucket_error("bucket_exists", &bucket(), S3Error::HttpFail) {
            StorageError::BackendError { operation, message } => {
                assert_eq!(operation, "bucket_exists");
                assert!(message.starts_with("bucket events: "));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_object_not_found_keeps_key() {
        let key = ObjectKey::new("abc/1").unwrap();
        let err = object_store::Error::NotFound {
            path: "abc/1".to_string(),
            source: "missing".into(),
        };
        match object_store_error("get_object", &key, err) {
            StorageError::ObjectNotFound { key: found } => assert_eq!(found, key),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
