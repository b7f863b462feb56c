//! Route definitions for the JobHub HTTP API.
//!
//! Job endpoints are nested under `/jobs`; the health check sits at the
//! root. The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/jobs", job_routes())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Job CRUD endpoints
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(handlers::job::create))
        .route("/read", get(handlers::job::read))
        .route("/getdata/{id}", get(handlers::job::get_data))
        .route("/update", put(handlers::job::update))
        .route("/delete/{id}", delete(handlers::job::delete))
}
