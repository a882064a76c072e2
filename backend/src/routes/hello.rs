use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const GREETING: &str = "Hello from Ecclesia backend";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    message: &'static str,
}

/// Routes served under the `/api/v1` prefix.
pub fn router() -> Router {
    Router::new().route("/hello", get(hello))
}

pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { message: GREETING })
}
