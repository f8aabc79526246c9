use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{PublishError, StorageError, ValidationError},
    models::{Element, ObjectInfo},
};

/// Body of `POST /publish`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishRequestDto {
    #[serde(alias = "clientID")]
    pub client_id: String,
    pub payload: String,
}

impl From<PublishRequestDto> for Element {
    fn from(dto: PublishRequestDto) -> Self {
        Element::new(dto.client_id, dto.payload)
    }
}

/// Where a published element ended up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponseDto {
    pub bucket: String,
    pub key: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl From<ObjectInfo> for PublishResponseDto {
    fn from(info: ObjectInfo) -> Self {
        Self {
            bucket: info.bucket.to_string(),
            key: info.key.to_string(),
            size: info.size,
            etag: info.etag,
        }
    }
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponseDto {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn from_validation_error(error: &ValidationError) -> Self {
        Self::new("ValidationError", error.to_string())
    }

    pub fn from_storage_error(error: &StorageError) -> Self {
        Self::new("StorageError", error.to_string())
    }

    pub fn from_publish_error(error: &PublishError) -> Self {
        match error {
            PublishError::InvalidKey(e) => Self::from_validation_error(e),
            PublishError::Upload(e) => Self::from_storage_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_both_client_id_spellings() {
        let snake: PublishRequestDto =
            serde_json::from_str(r#"{"client_id": "abc", "payload": "hello"}"#).unwrap();
        let camel: PublishRequestDto =
            serde_json::from_str(r#"{"clientID": "abc", "payload": "hello"}"#).unwrap();

        assert_eq!(snake.client_id, "abc");
        assert_eq!(camel.client_id, "abc");

        let element = Element::from(camel);
        assert_eq!(element.payload.as_ref(), b"hello");
    }
}
