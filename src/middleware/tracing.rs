//! Request logging middleware

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log every request with method, path, client ip, status, and timing.
///
/// The client ip comes from `x-forwarded-for` (first hop) or `x-real-ip`;
/// the server is expected to sit behind a proxy that sets one of them.
pub async fn request_tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = forwarded_client_ip(&request);

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            client_ip = ?client_ip,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            client_ip = ?client_ip,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request rejected"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            client_ip = ?client_ip,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}

fn forwarded_client_ip(request: &Request) -> Option<String> {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|hop| hop.trim().to_string())
        .or_else(|| {
            request
                .headers()
                .get("x-real-ip")
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string())
        })
}
