use std::collections::HashMap;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};
use tokio::net::TcpListener;

/// Every route except `/redirect` answers with `Connection: close`, since the
/// client reads until the peer hangs up.
const CLOSE: [(header::HeaderName, &str); 1] = [(header::CONNECTION, "close")];

pub fn app() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/echo", post(echo))
        .route("/form", post(form))
        .route("/redirect", get(redirect))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> impl IntoResponse {
    (CLOSE, "hello")
}

async fn echo(body: String) -> impl IntoResponse {
    (CLOSE, body)
}

async fn form(Form(fields): Form<HashMap<String, String>>) -> impl IntoResponse {
    (CLOSE, Json(fields))
}

/// Leaves the connection open so only an early-terminating client returns.
async fn redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/hello")])
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, CLOSE, "not found")
}
