// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod chain;
mod error;
mod express;
mod log;
mod metrics;

pub use args::Args;
pub use chain::{ChainConfig, ChainError};
pub use error::ConfigError;
pub use express::{ExpressConfig, ExpressError};
pub use log::{LogConfig, LogError};
pub use metrics::{MetricsConfig, MetricsError};

use serde::Deserialize;

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "BE_";

/// Flat view of the environment, as `envy` sees it.
///
/// Every field is optional so that unset variables fall back to the
/// defaults of the section they belong to.
#[derive(Debug, Default, Deserialize)]
struct EnvVars {
    express_bind_host: Option<String>,
    express_port: Option<u16>,
    express_request_timeout_ms: Option<u64>,

    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,
    log_loki_url: Option<String>,

    chain_rpc_url: Option<String>,
    chain_account_prefix: Option<String>,
    chain_validator_prefix: Option<String>,
    chain_default_denom: Option<String>,
    chain_default_display: Option<String>,
    chain_default_exponent: Option<u32>,

    metrics_enabled: Option<bool>,
    metrics_prometheus_prefix: Option<String>,
    metrics_include_queryparams: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub chain: ChainConfig,
    pub metrics: MetricsConfig,
}

impl ExplorerConfig {
    /// Loads the configuration from `BE_*` environment variables and validates it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = envy::prefixed(ENV_PREFIX).from_env::<EnvVars>()?;
        let config = Self::from_vars(vars);
        config.validate()?;
        Ok(config)
    }

    fn from_vars(vars: EnvVars) -> Self {
        let express_defaults = ExpressConfig::default();
        let express = ExpressConfig {
            bind_host: vars.express_bind_host.unwrap_or(express_defaults.bind_host),
            port: vars.express_port.unwrap_or(express_defaults.port),
            request_timeout_ms: vars
                .express_request_timeout_ms
                .unwrap_or(express_defaults.request_timeout_ms),
        };

        let log_defaults = LogConfig::default();
        let log = LogConfig {
            level: vars.log_level.unwrap_or(log_defaults.level),
            json: vars.log_json.unwrap_or(log_defaults.json),
            strip_ansi: vars.log_strip_ansi.unwrap_or(log_defaults.strip_ansi),
            write: vars.log_write.unwrap_or(log_defaults.write),
            write_path: vars.log_write_path.unwrap_or(log_defaults.write_path),
            write_max_file_size: vars
                .log_write_max_file_size
                .unwrap_or(log_defaults.write_max_file_size),
            write_max_files: vars.log_write_max_files.unwrap_or(log_defaults.write_max_files),
            loki_url: vars.log_loki_url.filter(|url| !url.is_empty()),
        };

        let chain_defaults = ChainConfig::default();
        let account_prefix = vars
            .chain_account_prefix
            .unwrap_or(chain_defaults.account_prefix);
        let validator_prefix = vars
            .chain_validator_prefix
            .unwrap_or_else(|| format!("{account_prefix}valoper"));
        let chain = ChainConfig {
            rpc_url: vars.chain_rpc_url.unwrap_or(chain_defaults.rpc_url),
            account_prefix,
            validator_prefix,
            default_denom: vars.chain_default_denom.unwrap_or(chain_defaults.default_denom),
            default_display: vars
                .chain_default_display
                .unwrap_or(chain_defaults.default_display),
            default_exponent: vars
                .chain_default_exponent
                .unwrap_or(chain_defaults.default_exponent),
        };

        let metrics_defaults = MetricsConfig::default();
        let metrics = MetricsConfig {
            enabled: vars.metrics_enabled.unwrap_or(metrics_defaults.enabled),
            prometheus_prefix: vars
                .metrics_prometheus_prefix
                .unwrap_or(metrics_defaults.prometheus_prefix),
            include_queryparams: vars
                .metrics_include_queryparams
                .unwrap_or(metrics_defaults.include_queryparams),
        };

        Self {
            express,
            log,
            chain,
            metrics,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.chain.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "BE_EXPRESS_PORT",
        "BE_EXPRESS_BIND_HOST",
        "BE_LOG_LEVEL",
        "BE_LOG_LOKI_URL",
        "BE_CHAIN_RPC_URL",
        "BE_CHAIN_ACCOUNT_PREFIX",
        "BE_CHAIN_VALIDATOR_PREFIX",
        "BE_CHAIN_DEFAULT_EXPONENT",
        "BE_METRICS_ENABLED",
    ];

    fn clear_vars() {
        for var in VARS {
            // SAFETY: tests touching the environment are serialized.
            unsafe { env::remove_var(var) };
        }
    }

    fn set_var(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized.
        unsafe { env::set_var(key, value) };
    }

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert_eq!(config.express.port, 8080);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.chain.account_prefix, "cosmos");
        assert_eq!(config.chain.validator_prefix, "cosmosvaloper");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_uses_defaults_when_unset() {
        clear_vars();
        let config = ExplorerConfig::from_env().unwrap();
        assert_eq!(config.express.bind_host, "127.0.0.1");
        assert_eq!(config.chain.rpc_url, "http://127.0.0.1:26657");
        assert_eq!(config.chain.default_denom, "urax");
        assert!(config.log.loki_url.is_none());
        assert!(!config.metrics.enabled);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_prefixed_vars() {
        clear_vars();
        set_var("BE_EXPRESS_PORT", "9090");
        set_var("BE_LOG_LEVEL", "debug");
        set_var("BE_CHAIN_RPC_URL", "https://rpc.example.org:443");
        set_var("BE_METRICS_ENABLED", "true");

        let config = ExplorerConfig::from_env().unwrap();
        clear_vars();

        assert_eq!(config.express.port, 9090);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.chain.rpc_url, "https://rpc.example.org:443");
        assert!(config.metrics.enabled);
    }

    #[test]
    #[serial]
    fn test_validator_prefix_follows_account_prefix() {
        clear_vars();
        set_var("BE_CHAIN_ACCOUNT_PREFIX", "evmos");
        let config = ExplorerConfig::from_env().unwrap();
        clear_vars();

        assert_eq!(config.chain.account_prefix, "evmos");
        assert_eq!(config.chain.validator_prefix, "evmosvaloper");
    }

    #[test]
    #[serial]
    fn test_explicit_validator_prefix_wins() {
        clear_vars();
        set_var("BE_CHAIN_ACCOUNT_PREFIX", "evmos");
        set_var("BE_CHAIN_VALIDATOR_PREFIX", "evmosval");
        let config = ExplorerConfig::from_env().unwrap();
        clear_vars();

        assert_eq!(config.chain.validator_prefix, "evmosval");
    }

    #[test]
    #[serial]
    fn test_empty_loki_url_is_ignored() {
        clear_vars();
        set_var("BE_LOG_LOKI_URL", "");
        let config = ExplorerConfig::from_env().unwrap();
        clear_vars();

        assert!(config.log.loki_url.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_values() {
        clear_vars();
        set_var("BE_LOG_LEVEL", "verbose");
        let result = ExplorerConfig::from_env();
        clear_vars();
        assert!(matches!(result, Err(ConfigError::LogError(_))));

        set_var("BE_CHAIN_RPC_URL", "ws://127.0.0.1:26657");
        let result = ExplorerConfig::from_env();
        clear_vars();
        assert!(matches!(result, Err(ConfigError::ChainError(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unparseable_values() {
        clear_vars();
        set_var("BE_EXPRESS_PORT", "not-a-port");
        let result = ExplorerConfig::from_env();
        clear_vars();
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }
}
