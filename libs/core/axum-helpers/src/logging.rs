//! Request/response logging middleware.
//!
//! Records method and path before dispatch, and status code and body after the
//! handler completes. Bodies are buffered, logged through `tracing`, and
//! replayed unchanged, so logging stays a side channel: the client sees the
//! exact bytes the handler produced.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

/// Bodies are logged up to this many bytes; the rest is elided from the log
/// line only, never from the wire.
const MAX_LOGGED_BODY: usize = 4096;

/// Middleware that logs every request and its response.
///
/// Apply with `axum::middleware::from_fn(log_requests)`. Place it inside any
/// compression layer so the logged response body is the uncompressed one.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = req.into_parts();
    let request_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(%method, %path, "failed to read request body: {}", e);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if request_bytes.is_empty() {
        debug!(%method, %path, "request");
    } else {
        debug!(%method, %path, body = %preview(&request_bytes), "request");
    }

    let req = Request::from_parts(parts, Body::from(request_bytes));
    let response = next.run(req).await;

    let (parts, body) = response.into_parts();
    let response_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            info!(%method, %path, "failed to read response body: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    info!(
        %method,
        %path,
        status = parts.status.as_u16(),
        body = %preview(&response_bytes),
        "response"
    );

    Response::from_parts(parts, Body::from(response_bytes))
}

/// A loggable view of a body: lossy UTF-8, truncated to [`MAX_LOGGED_BODY`].
fn preview(bytes: &Bytes) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.len() <= MAX_LOGGED_BODY {
        return text.into_owned();
    }
    let mut end = MAX_LOGGED_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes)", &text[..end], bytes.len())
}
