//! Test helpers for museum server integration tests
//!
//! Every test gets a private in-memory database with migrations applied and
//! a router built exactly as the server builds it.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use museum_server::{
    api,
    config::{Config, DatabaseConfig},
    db,
    middleware::OPERATOR_HEADER,
};
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(db::connect_options("sqlite::memory:").expect("in-memory options"))
        .await
        .expect("Failed to open in-memory database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed database with a multi-connection pool, as the server runs it
pub async fn setup_file_db(dir: &tempfile::TempDir, max_connections: u32) -> SqlitePool {
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("museum.db").display()),
        max_connections,
        min_connections: 1,
        connect_timeout_secs: 10,
        idle_timeout_secs: 600,
    };
    let pool = db::create_pool(&config)
        .await
        .expect("Failed to open file database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn setup_test_app(pool: SqlitePool) -> Router {
    api::create_router(pool, &Config::default())
}

/// Send one request and decode the JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    operator: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(operator) = operator {
        builder = builder.header(OPERATOR_HEADER, operator);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

pub fn exhibit_body(inventory_number: &str, status: &str, location: &str) -> Value {
    json!({
        "inventory_number": inventory_number,
        "name": format!("Exhibit {}", inventory_number),
        "description": "Integration test exhibit",
        "acquisition_date": "2021-04-12",
        "status": status,
        "current_location": location,
    })
}

/// Create an exhibit through the API and return its id
pub async fn create_exhibit(app: &Router, inventory_number: &str, status: &str) -> i64 {
    let (code, json) = send(
        app,
        Method::POST,
        "/api/v1/admin/exhibits",
        Some(exhibit_body(inventory_number, status, "Hall 1")),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::CREATED, "{}", json);
    json["data"]["id"].as_i64().unwrap()
}

/// Create an operator through the API and return its id as a string
pub async fn create_operator(app: &Router, username: &str) -> String {
    let (code, json) = send(
        app,
        Method::POST,
        "/api/v1/admin/operators",
        Some(json!({ "username": username })),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::CREATED, "{}", json);
    json["data"]["id"].as_str().unwrap().to_string()
}

pub async fn update_exhibit(
    app: &Router,
    id: i64,
    changes: Value,
    operator: Option<&str>,
) -> (StatusCode, Value) {
    send(
        app,
        Method::PUT,
        &format!("/api/v1/admin/exhibits/{}", id),
        Some(changes),
        operator,
    )
    .await
}

pub async fn history_for(app: &Router, exhibit_id: i64) -> Vec<Value> {
    let (code, json) = get(app, &format!("/api/v1/admin/history?exhibit_id={}", exhibit_id)).await;
    assert_eq!(code, StatusCode::OK, "{}", json);
    json["data"].as_array().unwrap().clone()
}

pub fn random_operator_id() -> String {
    Uuid::new_v4().to_string()
}
