//! Shared helpers for router-level tests.

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use tempfile::TempDir;

use promovid_api::{create_router, ApiConfig, AppState};

pub const BOUNDARY: &str = "----promovidtestboundary";

/// Build a router backed by a throwaway static root.
pub async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = ApiConfig {
        static_dir: dir.path().to_string_lossy().into_owned(),
        ..ApiConfig::default()
    };
    let state = AppState::new(config).await.unwrap();
    (create_router(state), dir)
}

/// A text part of a multipart form body.
pub fn text_part(name: &str, value: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
    )
}

/// A file part of a multipart form body.
pub fn file_part(name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> String {
    let mut part = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
    );
    part.push_str(&String::from_utf8_lossy(bytes));
    part.push_str("\r\n");
    part
}

/// Assemble parts into a POST request with the right content type.
pub fn multipart_request(uri: &str, parts: &[String]) -> Request<Body> {
    let mut body = parts.concat();
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
