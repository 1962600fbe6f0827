// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to load env file '{path}': {source}")]
    EnvFileError {
        path: String,
        #[source]
        source: dotenv::Error,
    },

    #[error("Express configuration error: {0}")]
    ExpressError(#[from] crate::express::ExpressError),

    #[error("Log configuration error: {0}")]
    LogError(#[from] crate::log::LogError),

    #[error("Chain configuration error: {0}")]
    ChainError(#[from] crate::chain::ChainError),

    #[error("Metrics configuration error: {0}")]
    MetricsError(#[from] crate::metrics::MetricsError),
}
