// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::chain::ChainQueryClient;
use crate::proto::Coin;
use crate::proto::bank::{DenomUnit, Metadata};
use std::collections::HashMap;

/// Bank metadata of the denominations present in one message, keyed by base denom.
pub type DenomsMetadata = HashMap<String, Metadata>;

/// Metadata assumed for the chain's native token when the node has none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenomFallback {
    pub denom: String,
    pub display: String,
    pub exponent: u32,
}

impl DenomFallback {
    pub fn new(denom: impl Into<String>, display: impl Into<String>, exponent: u32) -> Self {
        Self {
            denom: denom.into(),
            display: display.into(),
            exponent,
        }
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            description: String::new(),
            denom_units: vec![
                DenomUnit {
                    denom: self.denom.clone(),
                    exponent: 0,
                    aliases: vec![],
                },
                DenomUnit {
                    denom: self.display.clone(),
                    exponent: self.exponent,
                    aliases: vec![],
                },
            ],
            base: self.denom.clone(),
            display: self.display.clone(),
            name: self.display.clone(),
            symbol: self.display.clone(),
        }
    }
}

impl Default for DenomFallback {
    fn default() -> Self {
        Self::new("urax", "RAX", 18)
    }
}

/// Fetches bank metadata once per distinct denomination of `coins`.
///
/// Lookup failures are skipped. When nothing at all was found and the fallback
/// denomination is among the coins, its fallback metadata is used instead.
pub async fn fetch_denoms_metadata(
    chain: &dyn ChainQueryClient,
    coins: &[Coin],
    fallback: &DenomFallback,
) -> DenomsMetadata {
    let mut found = DenomsMetadata::new();
    let mut queried: Vec<&str> = Vec::new();

    for coin in coins {
        let denom = coin.denom.as_str();
        if denom.is_empty() || queried.contains(&denom) {
            continue;
        }
        queried.push(denom);

        match chain.denom_metadata(denom).await {
            Ok(Some(metadata)) => {
                found.insert(denom.to_string(), metadata);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(denom, error = %e, "Failed to fetch denom metadata");
            }
        }
    }

    if found.is_empty() && coins.iter().any(|coin| coin.denom == fallback.denom) {
        found.insert(fallback.denom.clone(), fallback.metadata());
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{MockChainClient, metadata_with_exponent};

    #[tokio::test]
    async fn fetches_each_denom_once() {
        let chain = MockChainClient::new()
            .with_denom_metadata(metadata_with_exponent("uatom", "ATOM", 6));
        let coins = [
            Coin::new("1", "uatom"),
            Coin::new("2", "uatom"),
            Coin::new("3", ""),
        ];

        let found = fetch_denoms_metadata(&chain, &coins, &DenomFallback::default()).await;

        assert_eq!(found.len(), 1);
        assert_eq!(found["uatom"].display, "ATOM");
        assert_eq!(chain.denom_metadata_calls(), 1);
    }

    #[tokio::test]
    async fn falls_back_when_nothing_is_known() {
        let chain = MockChainClient::new();
        let coins = [Coin::new("5", "urax"), Coin::new("1", "ufoo")];

        let found = fetch_denoms_metadata(&chain, &coins, &DenomFallback::default()).await;

        assert_eq!(found.len(), 1);
        let rax = &found["urax"];
        assert_eq!(rax.display, "RAX");
        assert_eq!(rax.display_unit().map(|unit| unit.exponent), Some(18));
    }

    #[tokio::test]
    async fn no_fallback_when_other_metadata_exists() {
        let chain = MockChainClient::new()
            .with_denom_metadata(metadata_with_exponent("uatom", "ATOM", 6));
        let coins = [Coin::new("5", "urax"), Coin::new("1", "uatom")];

        let found = fetch_denoms_metadata(&chain, &coins, &DenomFallback::default()).await;

        assert!(found.contains_key("uatom"));
        assert!(!found.contains_key("urax"));
    }

    #[tokio::test]
    async fn failed_lookups_are_skipped() {
        let chain = MockChainClient::new().failing_denom_metadata("uatom");
        let coins = [Coin::new("1", "uatom")];

        let found = fetch_denoms_metadata(&chain, &coins, &DenomFallback::default()).await;
        assert!(found.is_empty());
    }
}
