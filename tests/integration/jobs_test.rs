//! Integration tests for the `/jobs` endpoints over the in-memory store.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_lifecycle_scenario() {
    let app = helpers::TestApp::new();

    let created = app.create(json!({"id": null, "title": "build"})).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body, "200::New job has been created");

    let listed = app.read().await;
    assert_eq!(listed.body, r#"[{"id":1,"title":"build"}]"#);

    let fetched = app.get(1).await;
    assert_eq!(fetched.body, r#"{"id":1,"title":"build"}"#);

    let deleted = app.delete(1).await;
    assert_eq!(deleted.body, "200::Job details has been deleted");

    let gone = app.get(1).await;
    assert_eq!(gone.status, StatusCode::OK);
    assert!(gone.body.starts_with("404::"), "got {}", gone.body);
}

#[tokio::test]
async fn test_read_empty_store() {
    let app = helpers::TestApp::new();

    let response = app.read().await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_created_job_round_trips_all_fields() {
    let app = helpers::TestApp::new();
    let posting = json!({
        "title": "Backend engineer",
        "company": "Acme",
        "salary": 5200,
        "remote": true,
        "skills": ["rust", "sql"],
    });

    app.create(posting.clone()).await;

    let mut expected = posting;
    expected["id"] = json!(1);
    assert_eq!(app.get(1).await.json(), expected);
}

#[tokio::test]
async fn test_read_returns_every_created_job() {
    let app = helpers::TestApp::new();
    for title in ["build", "test", "deploy"] {
        let reply = app.create(json!({ "title": title })).await;
        assert_eq!(reply.body, "200::New job has been created");
    }

    let jobs = app.read().await.json();
    let jobs = jobs.as_array().expect("array");
    assert_eq!(jobs.len(), 3);

    let mut titles: Vec<_> = jobs.iter().map(|j| j["title"].as_str().unwrap()).collect();
    titles.sort();
    assert_eq!(titles, vec!["build", "deploy", "test"]);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let app = helpers::TestApp::new();

    for id in [1, 7, 123_456] {
        assert!(app.get(id).await.body.starts_with("404::"));
        assert!(app.delete(id).await.body.starts_with("404::"));
    }
}

#[tokio::test]
async fn test_update_overwrites_whole_record() {
    let app = helpers::TestApp::new();
    app.create(json!({"title": "build", "salary": 100, "location": "remote"}))
        .await;

    let updated = app.update(json!({"id": 1, "title": "release"})).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body, "200::Job details has been updated");

    assert_eq!(app.get(1).await.json(), json!({"id": 1, "title": "release"}));
}

#[tokio::test]
async fn test_update_without_id_creates() {
    let app = helpers::TestApp::new();

    let reply = app.update(json!({"title": "fresh"})).await;
    assert_eq!(reply.body, "200::Job details has been updated");

    assert_eq!(app.read().await.json(), json!([{"id": 1, "title": "fresh"}]));
}

#[tokio::test]
async fn test_http_status_mode_mirrors_embedded_code() {
    let app = helpers::TestApp::with_http_status();

    let missing = app.get(5).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.body.starts_with("404::"));

    let created = app.create(json!({"title": "build"})).await;
    assert_eq!(created.status, StatusCode::OK);
}

#[tokio::test]
async fn test_any_origin_allowed() {
    let app = helpers::TestApp::new();

    let response = app.read().await;

    assert_eq!(
        response
            .headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_non_numeric_id_rejected_by_router() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/jobs/getdata/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_rejected_before_store() {
    let app = helpers::TestApp::new();

    let broken = app
        .request_raw("POST", "/jobs/create", r#"{"title": "build""#.to_string())
        .await;
    assert!(broken.status.is_client_error(), "got {}", broken.status);
    assert!(!broken.body.starts_with("200::"));

    let empty = app.request_raw("PUT", "/jobs/update", String::new()).await;
    assert!(empty.status.is_client_error(), "got {}", empty.status);

    assert_eq!(app.read().await.body, "[]");
}

#[tokio::test]
async fn test_replies_are_plain_text() {
    let app = helpers::TestApp::new();

    let created = app.create(json!({"title": "build"})).await;
    let listed = app.read().await;

    for response in [&created, &listed] {
        let content_type = response
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"), "got {content_type}");
    }
}

#[tokio::test]
async fn test_null_fields_are_not_echoed() {
    let app = helpers::TestApp::new();

    app.create(json!({"title": "x", "company": null})).await;

    assert_eq!(app.get(1).await.body, r#"{"id":1,"title":"x"}"#);
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}
