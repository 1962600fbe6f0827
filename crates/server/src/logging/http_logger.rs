// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

macro_rules! access_log {
    ($level:ident, $method:expr, $path:expr, $status:expr, $duration_ms:expr) => {
        tracing::$level!(
            target: "http",
            method = %$method,
            path = %$path,
            status = $status,
            duration_ms = $duration_ms,
            "{} {} {} {}ms",
            $method,
            $path,
            $status,
            $duration_ms
        )
    };
}

/// Access log for every request: "METHOD /path?query STATUS DURATIONms".
///
/// 2xx/3xx responses are logged at DEBUG, 4xx at WARN and 5xx at ERROR,
/// all under the `http` target.
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();
    match status {
        200..=399 => access_log!(debug, method, path, status, duration_ms),
        400..=499 => access_log!(warn, method, path, status, duration_ms),
        _ => access_log!(error, method, path, status, duration_ms),
    }

    response
}
