// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),
}

/// Configuration for Prometheus metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection
    pub enabled: bool,

    /// Prometheus metric name prefix (default: "cosmos_explorer_rpc")
    pub prometheus_prefix: String,

    /// Include query parameters in route labels
    pub include_queryparams: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: "cosmos_explorer_rpc".to_string(),
            include_queryparams: false,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsError> {
        // Must match [a-zA-Z_:][a-zA-Z0-9_:]*, Prometheus drops anything else.
        let mut chars = self.prometheus_prefix.chars();
        if let Some(first) = chars.next() {
            let first_ok = first.is_ascii_alphabetic() || first == '_' || first == ':';
            let rest_ok = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == ':');
            if !first_ok || !rest_ok {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }
        }

        Ok(())
    }
}
