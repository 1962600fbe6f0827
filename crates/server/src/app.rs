// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::REQUEST_BODY_LIMIT_BYTES;
use crate::logging::http_logger_middleware;
use crate::metrics::metrics_middleware;
use crate::routes::{self, API_VERSION, RegisterRoute};
use crate::state::AppState;
use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Assembles every route with the access log, tracing, CORS and, when enabled, metrics.
pub fn create_app(state: AppState) -> Router {
    let registry = state.route_registry.clone();

    let v1 = Router::new()
        .merge(routes::health::routes(&registry))
        .merge(routes::transactions::routes(&registry))
        .merge(routes::blocks::routes(&registry))
        .merge(routes::gov::routes(&registry))
        .merge(routes::staking::routes(&registry));

    let mut app = Router::new()
        .route_registered(&registry, "", "/", "get", get(routes::root::root_handler))
        .nest(API_VERSION, v1);

    if state.config.metrics.enabled {
        app = app.merge(routes::metrics::routes(&registry)).layer(
            middleware::from_fn_with_state(state.clone(), metrics_middleware),
        );
    }

    app.layer(middleware::from_fn(http_logger_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::bank::MsgSend;
    use crate::proto::{Coin, to_any};
    use crate::test_fixtures::{MockChainClient, account_address, block, decoded_tx, exec_result};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use config::ExplorerConfig;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(chain: MockChainClient) -> Router {
        create_app(AppState::with_chain(ExplorerConfig::default(), Arc::new(chain)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn send_tx() -> crate::chain::DecodedTx {
        decoded_tx(vec![to_any(&MsgSend {
            from_address: account_address(1),
            to_address: account_address(2),
            amount: vec![Coin::new("10", "uatom")],
        })])
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get_json(app_with(MockChainClient::new()), "/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn root_lists_registered_routes() {
        let (status, body) = get_json(app_with(MockChainClient::new()), "/").await;
        assert_eq!(status, StatusCode::OK);

        let paths: Vec<&str> = body["routes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|route| route["path"].as_str())
            .collect();
        for expected in [
            "/",
            "/v1/health",
            "/v1/transactions/:hash",
            "/v1/blocks/transactions",
            "/v1/gov/proposals",
            "/v1/staking/:address",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
        assert!(!paths.contains(&"/metrics"));
    }

    #[tokio::test]
    async fn block_range_is_served() {
        let tx = send_tx();
        let chain = MockChainClient::new()
            .with_status()
            .with_block(block(10, vec![tx.clone()]));

        let (status, body) =
            get_json(app_with(chain), "/v1/blocks/transactions?from=10&to=11").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["blocks"]["10"]["txs"][0]["hash"], tx.hash.as_str());
        assert_eq!(body["blocks"]["10"]["txs"][0]["type"], "cosmos");
        assert_eq!(body["missingBlocks"], serde_json::json!([11]));
    }

    #[tokio::test]
    async fn block_range_rejections_are_json_400() {
        for uri in [
            "/v1/blocks/transactions?from=5&to=2",
            "/v1/blocks/transactions?from=1&height=2",
            "/v1/blocks/transactions",
        ] {
            let (status, body) = get_json(app_with(MockChainClient::new()), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].is_string(), "{uri}");
        }
    }

    #[tokio::test]
    async fn transaction_lookup_statuses() {
        let tx = send_tx();
        let chain = MockChainClient::new().with_tx(7, tx.clone(), exec_result(0, Vec::new()));
        let app = app_with(chain);

        let (status, body) =
            get_json(app.clone(), &format!("/v1/transactions/0x{}", tx.hash)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["height"], 7);
        assert_eq!(body["messages"][0]["type"], "cosmos.bank.v1beta1.MsgSend");

        let (status, body) =
            get_json(app.clone(), &format!("/v1/transactions/{}", "0".repeat(64))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "transaction not found");

        let (status, _) = get_json(app, "/v1/transactions/xyz").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn proposals_page_defaults_to_first() {
        let app = app_with(MockChainClient::new());

        let (status, body) = get_json(app.clone(), "/v1/gov/proposals").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pageNo"], 1);
        assert_eq!(body["pageSize"], 20);

        let (status, _) = get_json(app, "/v1/gov/proposals?page=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn staking_query_failure_is_500() {
        let delegator = account_address(9);
        let app = app_with(MockChainClient::new().failing_account(&delegator));

        let (status, body) = get_json(app, &format!("/v1/staking/{delegator}")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("failed to get delegator delegations")
        );
    }

    #[tokio::test]
    async fn metrics_routes_are_absent_when_disabled() {
        let (status, _) = get_json(app_with(MockChainClient::new()), "/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn metrics_routes_are_served_when_enabled() {
        crate::metrics::init("explorer_test").unwrap();
        let mut config = ExplorerConfig::default();
        config.metrics.enabled = true;
        let app = create_app(AppState::with_chain(
            config,
            Arc::new(MockChainClient::new()),
        ));

        let (status, _) = get_json(app.clone(), "/v1/health").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_json(app, "/metrics.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().is_some_and(|families| !families.is_empty()));
    }
}
