use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    adapters::inbound::http::{
        dto::{ErrorResponseDto, PublishRequestDto, PublishResponseDto},
        router::AppState,
    },
    domain::{
        errors::{PublishError, StorageError},
        value_objects::ObjectKey,
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);

/// Handle one inbound element
pub async fn publish_element(
    State(app_state): State<AppState>,
    Json(request): Json<PublishRequestDto>,
) -> Result<(StatusCode, Json<PublishResponseDto>), ErrorResponse> {
    let info = app_state
        .publisher
        .publish(request.into())
        .await
        .map_err(|e| {
            let status_code = match e {
                PublishError::InvalidKey(_) => StatusCode::BAD_REQUEST,
                PublishError::Upload(_) => StatusCode::BAD_GATEWAY,
            };
            (status_code, Json(ErrorResponseDto::from_publish_error(&e)))
        })?;

    Ok((StatusCode::CREATED, Json(info.into())))
}

/// Read a published object back
pub async fn fetch_object(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ErrorResponse> {
    let object_key = ObjectKey::new(key).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::from_validation_error(&e)),
        )
    })?;

    let object = app_state
        .publisher
        .fetch(&object_key)
        .await
        .map_err(|e| {
            let status_code = match e {
                StorageError::ObjectNotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status_code, Json(ErrorResponseDto::from_storage_error(&e)))
        })?;

    let content_type = object
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], object.data).into_response())
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
