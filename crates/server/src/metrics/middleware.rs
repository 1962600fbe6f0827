// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use axum::body::Body;
use http_body_util::BodyExt;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Instant;

use crate::state::AppState;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
    RESPONSE_SIZE_BYTES,
};

lazy_static! {
    static ref ROUTE_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (
            Regex::new(r"^/v1/transactions/[^/]+$").expect("valid route pattern"),
            "/v1/transactions/:hash",
        ),
        (
            Regex::new(r"^/v1/staking/[^/]+$").expect("valid route pattern"),
            "/v1/staking/:address",
        ),
    ];
}

/// Route label for a request that did not match a registered route.
///
/// Path parameters become `:name`; with `include_query_params` the sorted
/// query parameter names are appended as `name=<?>`.
fn normalize_route(path: &str, query_string: Option<&str>, include_query_params: bool) -> String {
    let mut normalized = ROUTE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(path))
        .map(|(_, replacement)| replacement.to_string())
        .unwrap_or_else(|| path.to_string());

    if include_query_params
        && let Some(query) = query_string
        && !query.is_empty()
    {
        let mut params: Vec<&str> = query
            .split('&')
            .filter_map(|pair| pair.split('=').next())
            .filter(|name| !name.is_empty())
            .collect();
        params.sort_unstable();

        let query_params = params
            .iter()
            .map(|name| format!("{name}=<?>"))
            .collect::<Vec<_>>()
            .join("&");
        normalized = format!("{normalized}?{query_params}");
    }

    normalized
}

/// Counts requests and records duration and response size per method, route and status.
pub async fn metrics_middleware(
    State(state): State<AppState>,
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if path == "/metrics" || path == "/metrics.json" {
        return next.run(req).await;
    }

    HTTP_REQUESTS.inc();
    let start = Instant::now();

    let method = req.method().to_string();
    let route = match matched_path {
        Some(matched) => matched.as_str().to_string(),
        None => normalize_route(
            path,
            req.uri().query(),
            state.config.metrics.include_queryparams,
        ),
    };

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status();
    let status_code = status.as_u16().to_string();

    if status.is_client_error() || status.is_server_error() {
        HTTP_REQUEST_ERROR.inc();
    } else if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    }

    let labels = [method.as_str(), route.as_str(), status_code.as_str()];
    REQUEST_DURATION_SECONDS
        .with_label_values(&labels)
        .observe(duration);

    // The body is buffered to measure it, then handed back unchanged.
    let (parts, body) = response.into_parts();
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            tracing::warn!(route = %route, error = %e, "Failed to buffer response body for metrics");
            Default::default()
        }
    };
    if !bytes.is_empty() {
        RESPONSE_SIZE_BYTES
            .with_label_values(&labels)
            .observe(bytes.len() as f64);
    }

    Response::from_parts(parts, Body::from(bytes))
}
