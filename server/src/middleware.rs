//! Request id propagation and per-request logging.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Reuses the caller's `x-request-id` or mints one, echoes it on the
/// response, and logs the outcome at a level chosen by status class.
pub async fn request_logger(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(new_request_id);
    req.headers_mut().insert(REQUEST_ID_HEADER, request_id.clone());

    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    let mut response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis() as u64;
    let id = request_id.to_str().unwrap_or_default().to_owned();
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);

    if response.status().is_server_error() {
        error!(request_id = %id, status, latency_ms, "Request failed with status code: {status}");
    } else if response.status().is_client_error() {
        warn!(request_id = %id, status, latency_ms, "Request failed with status code: {status}");
    } else {
        info!(request_id = %id, status, latency_ms, "{method} {uri} completed");
    }
    response
}

fn new_request_id() -> HeaderValue {
    // A hyphenated UUID is always a valid header value.
    HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap_or(HeaderValue::from_static("unknown"))
}
