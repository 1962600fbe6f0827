// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use axum::ServiceExt;
use axum::extract::Request;
use config::{Args, ExplorerConfig};
use cosmos_explorer_rpc::{app, logging, metrics, state::AppState};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let env_file_loaded = args.load_env_file()?;
    let config = ExplorerConfig::from_env()?;

    logging::init_with_config((&config.log).into())?;
    if env_file_loaded {
        tracing::info!("Loaded environment from {}", args.env_file);
    }

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix)
            .context("failed to register Prometheus metrics")?;
    }

    let addr = format!("{}:{}", config.express.bind_host, config.express.port);
    tracing::info!("Chain RPC: {}", config.chain.rpc_url);
    tracing::info!(
        "Address prefixes: {} / {}",
        config.chain.account_prefix,
        config.chain.validator_prefix
    );
    tracing::info!("Log level: {}", config.log.level);

    let state = AppState::new(config)?;
    let app = NormalizePathLayer::trim_trailing_slash().layer(app::create_app(state));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
