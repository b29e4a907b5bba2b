use std::collections::HashMap;

use axum::http::{self, header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn hello_closes_connection() {
    let resp = app().oneshot(get_request("/hello")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONNECTION], "close");
    assert_eq!(body_bytes(resp).await, "hello");
}

#[tokio::test]
async fn echo_returns_raw_body() {
    let resp = app().oneshot(form_request("/echo", "a=1&b=2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "a=1&b=2");
}

#[tokio::test]
async fn form_decodes_fields() {
    let resp = app().oneshot(form_request("/form", "a=1&b=2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let fields: HashMap<String, String> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["a"], "1");
    assert_eq!(fields["b"], "2");
}

#[tokio::test]
async fn form_accepts_empty_body() {
    let resp = app().oneshot(form_request("/form", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "{}");
}

#[tokio::test]
async fn redirect_keeps_connection_open() {
    let resp = app().oneshot(get_request("/redirect")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()[header::LOCATION], "/hello");
    assert!(resp.headers().get(header::CONNECTION).is_none());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let resp = app().oneshot(get_request("/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(resp).await, "not found");
}
