//! Student API Tests
//!
//! Drives the full router over the in-memory store:
//! - Create then read returns the submitted record
//! - List filters by exact country and inclusive minimum age
//! - Update replaces every field
//! - Malformed identifiers are 422, unknown identifiers are 404

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use registrar::http_server::{HttpServer, HttpServerConfig};
use registrar::store::InMemoryStudentStore;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn router() -> Router {
    HttpServer::new(
        HttpServerConfig::default(),
        Arc::new(InMemoryStudentStore::new()),
    )
    .router()
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(router: &Router, body: Value) -> String {
    let (status, response) = send(router, "POST", "/students/", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    response["id"].as_str().unwrap().to_string()
}

fn student(name: &str, age: i64, city: &str, country: &str) -> Value {
    json!({
        "name": name,
        "age": age,
        "address": {"city": city, "country": country}
    })
}

fn names(list: &Value) -> Vec<String> {
    let mut names: Vec<String> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

// =============================================================================
// Lifecycle
// =============================================================================

/// The full create, list, update, read, delete walk-through.
#[tokio::test]
async fn test_student_lifecycle() {
    let router = router();

    let alice = student("Alice", 20, "X", "US");
    let id = create(&router, alice.clone()).await;
    assert_eq!(id.len(), 24);

    let (status, list) = send(&router, "GET", "/students/?country=US", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&id.as_str()));

    let (status, list) = send(&router, "GET", "/students/?age=25", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list["data"].as_array().unwrap().is_empty());

    let updated = student("Alice", 21, "Y", "US");
    let (status, body) = send(
        &router,
        "PATCH",
        &format!("/students/{}", id),
        Some(updated.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student updated successfully");

    let (status, body) = send(&router, "GET", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, updated);

    let (status, body) = send(&router, "DELETE", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted successfully");

    let (status, body) = send(&router, "GET", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
    assert_eq!(body["code"], 404);
}

/// Read returns the bare record, field for field.
#[tokio::test]
async fn test_read_returns_submitted_record() {
    let router = router();
    let body = student("Bob", 33, "Lyon", "FR");
    let id = create(&router, body.clone()).await;

    let (status, read) = send(&router, "GET", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, body);
    assert!(read.get("id").is_none());
}

/// The collection path works with and without the trailing slash.
#[tokio::test]
async fn test_collection_path_without_trailing_slash() {
    let router = router();
    let (status, _) = send(&router, "POST", "/students", Some(student("Cy", 19, "Oslo", "NO"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = send(&router, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&list), vec!["Cy"]);
}

// =============================================================================
// Filtering
// =============================================================================

#[tokio::test]
async fn test_list_filters() {
    let router = router();
    create(&router, student("Alice", 20, "X", "US")).await;
    create(&router, student("Bob", 25, "Y", "US")).await;
    create(&router, student("Chloe", 30, "Paris", "FR")).await;
    create(&router, student("Dev", 40, "Pune", "IN")).await;

    let (_, all) = send(&router, "GET", "/students/", None).await;
    assert_eq!(names(&all), vec!["Alice", "Bob", "Chloe", "Dev"]);

    let (_, us) = send(&router, "GET", "/students/?country=US", None).await;
    assert_eq!(names(&us), vec!["Alice", "Bob"]);

    let (_, at_least_25) = send(&router, "GET", "/students/?age=25", None).await;
    assert_eq!(names(&at_least_25), vec!["Bob", "Chloe", "Dev"]);

    let (_, both) = send(&router, "GET", "/students/?country=US&age=25", None).await;
    assert_eq!(names(&both), vec!["Bob"]);

    let (_, none) = send(&router, "GET", "/students/?country=us", None).await;
    assert!(names(&none).is_empty());

    let (_, empty_country) = send(&router, "GET", "/students/?country=", None).await;
    assert_eq!(names(&empty_country).len(), 4);
}

/// Ages and bounds beyond 32 bits are ordinary integers.
#[tokio::test]
async fn test_age_beyond_32_bits() {
    let router = router();
    let big = i64::from(i32::MAX) + 1;
    let elder = student("Elder", big, "Old Town", "GR");
    let id = create(&router, elder.clone()).await;
    create(&router, student("Young", 20, "X", "GR")).await;

    let (status, read) = send(&router, "GET", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, elder);

    let (status, list) = send(&router, "GET", &format!("/students/?age={}", big), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&list), vec!["Elder"]);

    let (status, list) = send(&router, "GET", &format!("/students/?age={}", big + 1), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&list).is_empty());
}

#[tokio::test]
async fn test_non_numeric_age_is_validation_error() {
    let router = router();
    let (status, body) = send(&router, "GET", "/students/?age=old", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_create_rejects_malformed_bodies() {
    let router = router();
    let bad_bodies = [
        json!({"name": "Alice", "age": 20}),
        json!({"name": "Alice", "age": "twenty", "address": {"city": "X", "country": "US"}}),
        json!({"name": "Alice", "age": 20, "address": {"city": "X"}}),
        json!({"age": 20, "address": {"city": "X", "country": "US"}}),
        json!({"name": "Alice", "age": 20, "address": "X, US"}),
    ];

    for body in bad_bodies {
        let (status, _) = send(&router, "POST", "/students/", Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
    }

    let (_, all) = send(&router, "GET", "/students/", None).await;
    assert!(names(&all).is_empty());
}

#[tokio::test]
async fn test_create_rejects_non_json_request() {
    let router = router();
    let request = Request::builder()
        .method("POST")
        .uri("/students/")
        .body(Body::from("name=Alice"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_id_is_validation_error() {
    let router = router();
    let body = student("Alice", 20, "X", "US");

    for (method, payload) in [("GET", None), ("PATCH", Some(body)), ("DELETE", None)] {
        let (status, response) = send(&router, method, "/students/not-an-id", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", method);
        assert_eq!(response["code"], 422);
    }
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let router = router();
    let missing = "507f1f77bcf86cd799439011";
    let body = student("Alice", 20, "X", "US");

    for (method, payload) in [("GET", None), ("PATCH", Some(body)), ("DELETE", None)] {
        let (status, _) = send(&router, method, &format!("/students/{}", missing), payload).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", method);
    }
}

// =============================================================================
// Update Semantics
// =============================================================================

/// An identical body modifies nothing and is reported as not found.
#[tokio::test]
async fn test_identical_update_is_not_found() {
    let router = router();
    let body = student("Alice", 20, "X", "US");
    let id = create(&router, body.clone()).await;

    let (status, _) = send(&router, "PATCH", &format!("/students/{}", id), Some(body.clone())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, read) = send(&router, "GET", &format!("/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, body);
}

/// Update is a full replacement; a partial body is rejected outright.
#[tokio::test]
async fn test_update_requires_complete_body() {
    let router = router();
    let id = create(&router, student("Alice", 20, "X", "US")).await;

    let (status, _) = send(
        &router,
        "PATCH",
        &format!("/students/{}", id),
        Some(json!({"age": 22})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, read) = send(&router, "GET", &format!("/students/{}", id), None).await;
    assert_eq!(read["age"], 20);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let router = router();
    let id = create(&router, student("Alice", 20, "X", "US")).await;
    let uri = format!("/students/{}", id);

    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let router = router();
    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_store_health() {
    let router = router();
    let (status, body) = send(&router, "GET", "/health/store", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
