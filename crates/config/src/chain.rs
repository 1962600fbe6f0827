// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;
use url::Url;

/// Largest exponent a display unit may declare; `10^77` is the largest power of ten below `2^256`.
pub const MAX_DISPLAY_EXPONENT: u32 = 77;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Invalid bech32 prefix '{0}': must be non-empty lowercase ASCII")]
    InvalidPrefix(String),

    #[error("Account and validator prefixes must differ, both are '{0}'")]
    PrefixCollision(String),

    #[error("Default denom and display unit cannot be empty")]
    EmptyDefaultDenom,

    #[error("Default exponent {0} exceeds the maximum of {MAX_DISPLAY_EXPONENT}")]
    ExponentTooLarge(u32),
}

/// Settings describing the chain the explorer is attached to.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// CometBFT RPC endpoint
    ///
    /// Env: BE_CHAIN_RPC_URL
    /// Default: http://127.0.0.1:26657
    pub rpc_url: String,

    /// Bech32 human readable part of account addresses
    ///
    /// Env: BE_CHAIN_ACCOUNT_PREFIX
    /// Default: cosmos
    pub account_prefix: String,

    /// Bech32 human readable part of validator operator addresses
    ///
    /// Env: BE_CHAIN_VALIDATOR_PREFIX
    /// Default: `<account_prefix>valoper`
    pub validator_prefix: String,

    /// Base denom that gets display metadata even when the chain has none registered
    ///
    /// Env: BE_CHAIN_DEFAULT_DENOM
    /// Default: urax
    pub default_denom: String,

    /// Display unit of the fallback denom
    ///
    /// Env: BE_CHAIN_DEFAULT_DISPLAY
    /// Default: RAX
    pub default_display: String,

    /// Exponent of the fallback display unit
    ///
    /// Env: BE_CHAIN_DEFAULT_EXPONENT
    /// Default: 18
    pub default_exponent: u32,
}

fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

impl ChainConfig {
    pub(crate) fn validate(&self) -> Result<(), ChainError> {
        let invalid_url = |reason: &str| ChainError::InvalidRpcUrl {
            url: self.rpc_url.clone(),
            reason: reason.to_string(),
        };
        let parsed = Url::parse(&self.rpc_url).map_err(|e| invalid_url(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid_url("scheme must be http or https"));
        }

        for prefix in [&self.account_prefix, &self.validator_prefix] {
            if !is_valid_prefix(prefix) {
                return Err(ChainError::InvalidPrefix(prefix.clone()));
            }
        }
        if self.account_prefix == self.validator_prefix {
            return Err(ChainError::PrefixCollision(self.account_prefix.clone()));
        }

        if self.default_denom.is_empty() || self.default_display.is_empty() {
            return Err(ChainError::EmptyDefaultDenom);
        }
        if self.default_exponent > MAX_DISPLAY_EXPONENT {
            return Err(ChainError::ExponentTooLarge(self.default_exponent));
        }

        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:26657".to_string(),
            account_prefix: "cosmos".to_string(),
            validator_prefix: "cosmosvaloper".to_string(),
            default_denom: "urax".to_string(),
            default_display: "RAX".to_string(),
            default_exponent: 18,
        }
    }
}
