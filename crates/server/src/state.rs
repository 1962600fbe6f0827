// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::backend::ExplorerBackend;
use crate::chain::{ChainQueryClient, CometRpcClient};
use crate::decoder::{DenomFallback, MessageRegistry};
use crate::routes::RouteRegistry;
use crate::utils::Bech32Config;
use config::ExplorerConfig;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ExplorerConfig>,
    pub backend: Arc<ExplorerBackend>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// Connects the backend to the configured CometBFT RPC endpoint.
    pub fn new(config: ExplorerConfig) -> anyhow::Result<Self> {
        let chain = CometRpcClient::new(&config.chain.rpc_url, request_timeout(&config))?;
        Ok(Self::with_chain(config, Arc::new(chain)))
    }

    pub fn with_chain(config: ExplorerConfig, chain: Arc<dyn ChainQueryClient>) -> Self {
        let backend = ExplorerBackend::new(
            chain,
            MessageRegistry::standard(),
            Bech32Config::new(&config.chain.account_prefix, &config.chain.validator_prefix),
            DenomFallback::new(
                &config.chain.default_denom,
                &config.chain.default_display,
                config.chain.default_exponent,
            ),
        );
        Self {
            config: Arc::new(config),
            backend: Arc::new(backend),
            route_registry: RouteRegistry::new(),
        }
    }

    /// Deadline covering every chain query made for one request.
    pub fn request_timeout(&self) -> Duration {
        request_timeout(&self.config)
    }
}

fn request_timeout(config: &ExplorerConfig) -> Duration {
    Duration::from_millis(config.express.request_timeout_ms)
}
