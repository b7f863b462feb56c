//! Job CRUD handlers.
//!
//! Handlers only extract parameters and delegate; the reply text comes
//! from [`JobService`](jobhub_service::JobService) unchanged.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use jobhub_core::config::StatusMode;
use jobhub_entity::job::Job;
use jobhub_service::JobReply;

use crate::state::AppState;

/// POST /jobs/create
pub async fn create(State(state): State<AppState>, Json(job): Json<Job>) -> Response {
    let reply = state.job_service.create(&job).await;
    respond(&state, reply)
}

/// GET /jobs/read
pub async fn read(State(state): State<AppState>) -> Response {
    let reply = state.job_service.read_all().await;
    respond(&state, reply)
}

/// GET /jobs/getdata/{id}
pub async fn get_data(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let reply = state.job_service.get_by_id(id).await;
    respond(&state, reply)
}

/// PUT /jobs/update
pub async fn update(State(state): State<AppState>, Json(job): Json<Job>) -> Response {
    let reply = state.job_service.update(&job).await;
    respond(&state, reply)
}

/// DELETE /jobs/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let reply = state.job_service.delete_by_id(id).await;
    respond(&state, reply)
}

/// Plain-text body; the HTTP status follows `server.status_mode`.
fn respond(state: &AppState, reply: JobReply) -> Response {
    let status = match state.config.server.status_mode {
        StatusMode::Body => StatusCode::OK,
        StatusMode::Http => StatusCode::from_u16(reply.code).unwrap_or(StatusCode::OK),
    };
    (status, reply.into_body()).into_response()
}
