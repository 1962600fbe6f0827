// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::backend::BackendError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    let body = Json(json!({ "error": message }));
    (status, body).into_response()
}

/// Implements `IntoResponse` for an error type from a variant to status mapping.
///
/// ```ignore
/// impl_error_response!(MyError,
///     MyError::Invalid(_) => BAD_REQUEST,
///     _ => INTERNAL_SERVER_ERROR
/// );
/// ```
macro_rules! impl_error_response {
    ($error_type:ty, $($variant:pat => $status:ident),+ $(,)?) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                let status = match &self {
                    $($variant => axum::http::StatusCode::$status,)+
                };
                $crate::handlers::error_response(status, self.to_string())
            }
        }
    };
}

impl_error_response!(BackendError,
    BackendError::BadRequest(_) => BAD_REQUEST,
    BackendError::NotFound(_) => NOT_FOUND,
    BackendError::Internal(_) => INTERNAL_SERVER_ERROR,
    BackendError::DeadlineExceeded { .. } => INTERNAL_SERVER_ERROR,
);

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: BackendError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn backend_errors_map_to_status_codes() {
        let (status, body) = render(BackendError::NotFound("transaction not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "transaction not found" }));

        let (status, _) = render(BackendError::BadRequest("bad".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = render(BackendError::DeadlineExceeded { timeout_ms: 250 }).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "request did not complete within 250 ms");
    }
}
