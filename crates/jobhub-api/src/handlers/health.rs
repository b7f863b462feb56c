//! Health check handler.

use axum::Json;
use axum::extract::State;

use jobhub_core::error::{AppError, ErrorKind};

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
///
/// Answers 503 when the job store cannot be reached.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let healthy = state.store.health_check().await.map_err(|e| {
        let message = format!("Job store unreachable: {}", e.message);
        AppError::with_source(ErrorKind::ServiceUnavailable, message, e)
    })?;

    if !healthy {
        return Err(AppError::service_unavailable("Job store returned an unexpected answer").into());
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.provider().to_string(),
    }))
}
