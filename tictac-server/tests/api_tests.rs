//! Integration tests for the tictac-server API

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tictac_server::{create_router, ServerConfig};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = ServerConfig::default();
    create_router(&config)
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "minimax");
}

#[tokio::test]
async fn test_cpu_move_completes_winning_row() {
    let body = json!({
        "board": ["X", "X", " ", "O", "O", " ", " ", " ", " "],
        "cpu": "X"
    });
    let (status, json) = post_json(test_app(), "/cpu_move", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["move"], 2);
}

#[tokio::test]
async fn test_cpu_move_as_minimizer() {
    let body = json!({
        "board": ["O", "O", " ", "X", "X", " ", " ", " ", " "],
        "cpu": "O"
    });
    let (status, json) = post_json(test_app(), "/cpu_move", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["move"], 2);
}

#[tokio::test]
async fn test_cpu_move_on_full_board_is_null() {
    let body = json!({
        "board": ["X", "O", "X", "O", "X", "O", "O", "X", "O"],
        "cpu": "X"
    });
    let (status, json) = post_json(test_app(), "/cpu_move", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["move"], Value::Null);
}

#[tokio::test]
async fn test_cpu_move_on_empty_board() {
    let body = json!({
        "board": [" ", " ", " ", " ", " ", " ", " ", " ", " "],
        "cpu": "X"
    });
    let (status, json) = post_json(test_app(), "/cpu_move", body).await;

    assert_eq!(status, StatusCode::OK);
    let cell = json["move"].as_u64().expect("move should be an index");
    assert!(cell < 9);
}

#[tokio::test]
async fn test_check_reports_winner() {
    let body = json!({
        "board": ["X", "X", "X", "O", "O", " ", " ", " ", " "]
    });
    let (status, json) = post_json(test_app(), "/check", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["winner"], "X");
    assert_eq!(json["tie"], false);
}

#[tokio::test]
async fn test_check_reports_tie() {
    let body = json!({
        "board": ["X", "O", "X", "O", "X", "O", "O", "X", "O"]
    });
    let (status, json) = post_json(test_app(), "/check", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["winner"], Value::Null);
    assert_eq!(json["tie"], true);
}

#[tokio::test]
async fn test_check_on_ongoing_game() {
    let body = json!({
        "board": ["X", " ", " ", " ", "O", " ", " ", " ", " "]
    });
    let (status, json) = post_json(test_app(), "/check", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["winner"], Value::Null);
    assert_eq!(json["tie"], false);
}

#[tokio::test]
async fn test_wrong_length_board_is_rejected() {
    let body = json!({
        "board": ["X", "O"],
        "cpu": "X"
    });
    let (status, json) = post_json(test_app(), "/cpu_move", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("9 cells"));
}

#[tokio::test]
async fn test_unknown_symbol_is_rejected() {
    let body = json!({
        "board": ["X", "O", "Z", " ", " ", " ", " ", " ", " "],
        "cpu": "X"
    });
    let (status, _) = post_json(test_app(), "/cpu_move", body).await;

    // Rejected by the JSON extractor before the handler runs
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
