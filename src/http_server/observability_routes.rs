//! Observability HTTP Routes
//!
//! `/health` reports process liveness without touching the store.
//! `/health/store` pings the store and answers 503 when it is unreachable.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::store::StudentStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            error: None,
        }
    }

    fn unavailable(error: String) -> Self {
        Self {
            status: "unavailable".to_string(),
            error: Some(error),
            ..Self::ok()
        }
    }
}

/// Health routes at the root level
pub fn health_routes(store: Arc<dyn StudentStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/health/store", get(store_health_handler))
        .with_state(store)
}

/// Liveness handler
async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

/// Store readiness handler
async fn store_health_handler(
    State(store): State<Arc<dyn StudentStore>>,
) -> (StatusCode, Json<HealthResponse>) {
    match store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::ok())),
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unavailable(e.to_string())),
            )
        }
    }
}
