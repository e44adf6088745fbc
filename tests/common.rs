//! Common test utilities for polls integration tests
//!
//! This file contains shared functions for all integration tests: building a
//! test application, creating questions and choices through the API, and
//! decoding responses.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use polls::{
    create_app,
    db::init_pool,
    dto::QuestionView,
    models::Choice,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::Service;

/// Creates a test application backed by a private in-memory SQLite database
///
/// Each call uses a uniquely named shared-cache database so that all pooled
/// connections see the same schema while tests stay isolated.
pub fn create_test_app() -> Router {
    let database_url = format!("file:it_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = Arc::new(init_pool(&database_url).unwrap());

    let mut conn = pool.get().unwrap();
    polls::run_migrations(&mut conn).unwrap();
    drop(conn);

    create_app(pool)
}

/// Sends a request to the app and returns the raw response
pub async fn send(app: &mut Router, request: Request<Body>) -> Response {
    app.call(request).await.unwrap()
}

/// Sends a GET request and returns the status and JSON body
pub async fn get_json(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;
    into_json(response).await
}

/// Sends a POST request with a JSON body and returns the status and JSON body
pub async fn post_json(app: &mut Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    let response = send(app, request).await;
    into_json(response).await
}

/// Splits a response into its status and JSON body
pub async fn into_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Creates a question published `days` days from now; negative values are in the past
///
/// This mirrors how the publication rule is exercised: a question is placed
/// relative to the current time rather than at a fixed date.
pub async fn create_question(app: &mut Router, question_text: &str, days: i64) -> QuestionView {
    let pub_date = Utc::now() + Duration::days(days);
    let (status, body) = post_json(app, "/polls", json!({
        "question_text": question_text,
        "pub_date": pub_date,
    }))
    .await;
    assert_eq!(status, StatusCode::OK, "create question failed: {}", body);
    serde_json::from_value(body).unwrap()
}

/// Adds a choice to a question via the API
pub async fn create_choice(app: &mut Router, question_id: &str, choice_text: &str) -> Choice {
    let (status, body) = post_json(
        app,
        &format!("/polls/{}/choices", question_id),
        json!({ "choice_text": choice_text }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create choice failed: {}", body);
    serde_json::from_value(body).unwrap()
}

/// Extracts the question texts of an index response, in order
pub fn listed_texts(index: &Value) -> Vec<String> {
    index["latest_question_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["question_text"].as_str().unwrap().to_string())
        .collect()
}
