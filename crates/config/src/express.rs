// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpressError {
    #[error("Invalid bind host: {0}")]
    InvalidBindHost(String),

    #[error("Express port cannot be 0")]
    InvalidPort,

    #[error("Request timeout must be greater than 0")]
    InvalidRequestTimeout,
}

/// Validates that a string is a valid host (IP address or hostname)
pub(crate) fn is_valid_host(host: &str) -> bool {
    if IpAddr::from_str(host).is_ok() {
        return true;
    }

    // RFC 1123
    if host.is_empty() || host.len() > 253 {
        return false;
    }

    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Address to bind the HTTP server to
    ///
    /// Env: BE_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: BE_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Deadline applied to every backend request, in milliseconds
    ///
    /// Env: BE_EXPRESS_REQUEST_TIMEOUT_MS
    /// Default: 30000
    pub request_timeout_ms: u64,
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ExpressError> {
        if !is_valid_host(&self.bind_host) {
            return Err(ExpressError::InvalidBindHost(self.bind_host.clone()));
        }

        if self.port == 0 {
            return Err(ExpressError::InvalidPort);
        }

        if self.request_timeout_ms == 0 {
            return Err(ExpressError::InvalidRequestTimeout);
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_ms: 30_000,
        }
    }
}
