use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет через tracing:
/// - длительность (ms)
/// - размер ответа по Content-Length (тело не буферизуется, wasm-бандл большой)
/// - статус, метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(format_size)
        .unwrap_or_else(|| "-".into());

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, %size, "request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, %size, "request");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, %size, "request");
    }

    response
}
