//! HTTP endpoint tests driven through the router without binding a socket.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use squares::router;
use tower::ServiceExt;

fn app() -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("index.html"), "<html>squares</html>").expect("write index");
    std::fs::write(dir.path().join("app.js"), "console.log(1);").expect("write script");
    let app = router(dir.path());
    (dir, app)
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}

#[tokio::test]
async fn test_next_move_on_empty_board() {
    let (_dir, app) = app();
    let (status, body) = post_json(
        app,
        "/api/squares/nextMove",
        json!({ "size": 4, "data": " ".repeat(16), "nextPlayerColor": "b" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({ "x": 0, "y": 0, "color": "b" }));
}

#[tokio::test]
async fn test_next_move_skips_occupied_cells() {
    let (_dir, app) = app();
    let (status, body) = post_json(
        app,
        "/api/squares/nextMove",
        json!({ "size": 3, "data": "wb.\n...\n...", "nextPlayerColor": "White" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({ "x": 2, "y": 0, "color": "w" }));
}

#[tokio::test]
async fn test_next_move_on_finished_board_is_no_content() {
    let (_dir, app) = app();
    let (status, body) = post_json(
        app,
        "/api/squares/nextMove",
        json!({ "size": 4, "data": "w.w.....w.w.....", "nextPlayerColor": "b" }),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_next_move_rejects_bad_input() {
    let (_dir, app) = app();

    let (status, body) = post_json(
        app.clone(),
        "/api/squares/nextMove",
        json!({ "size": 4, "data": "wb", "nextPlayerColor": "b" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = as_json(&body)["error"].as_str().unwrap_or_default().to_string();
    assert!(error.starts_with("Invalid board"), "{}", error);

    let (status, _) = post_json(
        app.clone(),
        "/api/squares/nextMove",
        json!({ "size": 3, "data": "         " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        app.clone(),
        "/api/squares/nextMove",
        json!({ "size": 3, "data": "         ", "nextPlayerColor": "red" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        app,
        "/api/squares/nextMove",
        json!({ "size": -3, "data": "", "nextPlayerColor": "w" }),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_game_status_codes() {
    let (_dir, app) = app();
    let cases = [
        (json!({ "size": 4, "data": " ".repeat(16) }), 0, Value::Null),
        (json!({ "size": 4, "data": "w.w.....w.w....." }), 1, json!("w")),
        (json!({ "size": 4, "data": "wwwwwbwbbbwbbwbb" }), 2, Value::Null),
        (json!({ "size": 2, "data": "wbwb" }), -1, Value::Null),
    ];

    for (request, code, color) in cases {
        let (status, body) = post_json(app.clone(), "/api/squares/gameStatus", request).await;
        assert_eq!(status, StatusCode::OK);
        let body = as_json(&body);
        assert_eq!(body["status"], json!(code));
        assert_eq!(body["color"], color);
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn test_static_files() {
    let (_dir, app) = app();

    let get = |uri: &str| {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    };

    let response = app.clone().oneshot(get("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    assert_eq!(&bytes[..], b"<html>squares</html>");

    let response = app.clone().oneshot(get("/app.js")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );

    let response = app.clone().oneshot(get("/missing.css")).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.clone().oneshot(get("/../Cargo.toml")).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/squares/nextMove")).await.expect("response");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_static_files_only_answer_get() {
    let (_dir, app) = app();

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let request = Request::builder()
            .method(method.clone())
            .uri("/index.html")
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
    }
}
