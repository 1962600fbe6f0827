// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Axum extractors whose rejections use the `{"error": ...}` body of every other failure.

use crate::handlers::error_response;
use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Response;
use serde::de::DeserializeOwned;

/// [`Query<T>`] that rejects malformed or unknown parameters with a JSON 400.
pub struct JsonQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| JsonQuery(value))
            .map_err(|rejection| error_response(StatusCode::BAD_REQUEST, rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::routing::get;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RangeParams {
        from: i64,
        #[serde(default)]
        to: i64,
    }

    async fn range_handler(JsonQuery(params): JsonQuery<RangeParams>) -> String {
        format!("{}..{}", params.from, params.to)
    }

    async fn send_request(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/range", get(range_handler));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn valid_params_are_extracted() {
        let (status, body) = send_request("/range?from=3&to=9").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "3..9");

        let (_, body) = send_request("/range?from=3").await;
        assert_eq!(body, "3..0");
    }

    #[tokio::test]
    async fn unknown_field_returns_json_400() {
        let (status, body) = send_request("/range?from=1&height=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response should be valid JSON");
        let error_msg = parsed["error"].as_str().unwrap();
        assert!(
            error_msg.contains("unknown field") || error_msg.contains("height"),
            "unexpected error message: {error_msg}"
        );
    }

    #[tokio::test]
    async fn missing_or_malformed_values_return_json_400() {
        for uri in ["/range", "/range?from=abc"] {
            let (status, body) = send_request(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let parsed: serde_json::Value =
                serde_json::from_str(&body).expect("Response must be valid JSON, not plain text");
            assert!(parsed.get("error").is_some());
        }
    }
}
