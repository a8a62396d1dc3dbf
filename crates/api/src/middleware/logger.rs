//! Diagnostic request logging.
//!
//! Records source host, URL, caller IP, and method when a request arrives
//! and the status plus elapsed time when it completes. Side effect only;
//! the request and response pass through untouched.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::http::header::HOST;
use axum::middleware::Next;
use axum::response::Response;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let host = request
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    // ConnectInfo is absent when the router is driven without a real
    // socket (tests); fall back rather than refuse to log.
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "-".into());

    tracing::info!(%method, %uri, %host, %ip, "Request received");

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    tracing::info!(%method, %uri, status = %response.status(), elapsed_ms, "Request completed");

    response
}
