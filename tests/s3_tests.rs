use object_store_bridge::{
    AppBuilder, AppError, BucketStatus, Element, ProvisioningError, Publisher, StorageConfig,
};

// The live tests need MinIO running and read these environment variables:
// - MINIO_ENDPOINT (default: localhost:9000)
// - MINIO_ACCESS_KEY_ID (default: minioadmin)
// - MINIO_SECRET_ACCESS_KEY (default: minioadmin)
// - MINIO_BUCKET (default: bridge-test-bucket)

fn minio_config() -> StorageConfig {
    StorageConfig {
        endpoint: std::env::var("MINIO_ENDPOINT").unwrap_or_else(|_| "localhost:9000".to_string()),
        region: "us-east-1".to_string(),
        access_key_id: std::env::var("MINIO_ACCESS_KEY_ID")
            .unwrap_or_else(|_| "minioadmin".to_string()),
        secret_access_key: std::env::var("MINIO_SECRET_ACCESS_KEY")
            .unwrap_or_else(|_| "minioadmin".to_string()),
        ssl: false,
        bucket: std::env::var("MINIO_BUCKET").unwrap_or_else(|_| "bridge-test-bucket".to_string()),
        path: "events".to_string(),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_structured_error() {
    let config = StorageConfig {
        // Nothing listens on port 1
        endpoint: "127.0.0.1:1".to_string(),
        ssl: false,
        bucket: "events".to_string(),
        ..StorageConfig::default()
    };

    let result = AppBuilder::new(config).build().await;
    match result {
        Err(AppError::Provisioning(
            ProvisioningError::ExistenceCheckFailed { bucket, .. }
            | ProvisioningError::NotOwned { bucket, .. },
        )) => {
            assert_eq!(bucket.as_str(), "events");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("publisher built against an unreachable endpoint"),
    }
}

#[test]
fn invalid_bucket_name_fails_before_network() {
    let config = StorageConfig {
        endpoint: "127.0.0.1:1".to_string(),
        bucket: "Invalid_Bucket".to_string(),
        ..StorageConfig::default()
    };

    let result = AppBuilder::new(config).build_store();
    assert!(matches!(result, Err(AppError::Connection { .. })));
}

#[tokio::test]
#[ignore = "requires MinIO server to be running"]
async fn minio_provision_publish_and_read_back() {
    let publisher = AppBuilder::new(minio_config()).build().await.unwrap();

    // A second connect against the same bucket must also succeed
    let again = AppBuilder::new(minio_config()).build().await.unwrap();
    assert_eq!(again.bucket_status(), BucketStatus::AlreadyOwned);

    let info = publisher
        .publish(Element::new("abc", "hello"))
        .await
        .unwrap();
    assert!(info.key.as_str().starts_with("events/abc/"));
    assert_eq!(info.size, 5);

    let stored = publisher.fetch(&info.key).await.unwrap();
    assert_eq!(stored.data.as_ref(), b"hello");
}
