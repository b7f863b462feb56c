//! Integration tests for persistence failures surfacing as status strings.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use jobhub_core::error::{AppError, ErrorKind};
use jobhub_core::result::AppResult;
use jobhub_core::traits::Repository;
use jobhub_entity::job::Job;

/// Store that rejects writes as duplicates and fails every read.
struct BrokenStore;

#[async_trait]
impl Repository<Job, i64> for BrokenStore {
    async fn save(&self, _job: &Job) -> AppResult<Job> {
        Err(AppError::new(
            ErrorKind::Conflict,
            "duplicate key value violates unique constraint \"jobs_pkey\"",
        ))
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        Err(AppError::service_unavailable("pool timed out while waiting for an open connection"))
    }

    async fn find_by_id(&self, _id: &i64) -> AppResult<Option<Job>> {
        Err(AppError::service_unavailable("pool timed out while waiting for an open connection"))
    }

    async fn delete_by_id(&self, _id: &i64) -> AppResult<bool> {
        Err(AppError::new(
            ErrorKind::Database,
            "relation \"jobs\" does not exist",
        ))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::service_unavailable("connection refused"))
    }
}

fn broken_app() -> helpers::TestApp {
    helpers::TestApp::with_store(Arc::new(BrokenStore))
}

#[tokio::test]
async fn test_create_failure_is_400_sentinel() {
    let response = broken_app().create(json!({"title": "build"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        "400::duplicate key value violates unique constraint \"jobs_pkey\""
    );
}

#[tokio::test]
async fn test_update_failure_is_400_sentinel() {
    let response = broken_app().update(json!({"id": 1, "title": "x"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.starts_with("400::duplicate key"));
}

#[tokio::test]
async fn test_read_failure_is_400_sentinel() {
    let response = broken_app().read().await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        "400::pool timed out while waiting for an open connection"
    );
}

#[tokio::test]
async fn test_get_and_delete_failures_are_404_sentinels() {
    let app = broken_app();

    let fetched = app.get(1).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert!(fetched.body.starts_with("404::pool timed out"));

    let deleted = app.delete(1).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body, "404::relation \"jobs\" does not exist");
}

#[tokio::test]
async fn test_health_is_503_when_store_unreachable() {
    let response = broken_app().request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json();
    assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["message"], "Job store unreachable: connection refused");
}
