use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{fetch_object, health, publish_element};
use crate::ports::services::Publisher;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub publisher: Arc<dyn Publisher>,
}

impl AppState {
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        Self { publisher }
    }
}

/// Create the router exposing the publish operation
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/publish", post(publish_element))
        .route("/objects/{*key}", get(fetch_object))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
