// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Explorer operations built on the decoder and the chain query client.
//!
//! Each operation is stateless: it queries the chain, decodes what it got and
//! returns a serializable response. Failures affecting a single message or a
//! single height are reported inline; only precondition violations and
//! failed collaborator queries abort a call.

mod gov;
mod staking;
mod transactions;

pub use gov::{PROPOSALS_PAGE_SIZE, ProposalMessage, ProposalSummary, ProposalsPage, TallyCounts};
pub use staking::StakingInfo;
pub use transactions::{
    BlockRange, BlockScanResult, BlockTxRecord, BlockTxs, MAX_BLOCK_RANGE, ParsedMessage, TxKind,
    TxResponse, TxResultSummary, plan_block_range,
};

use crate::chain::{ChainQueryClient, ChainQueryError};
use crate::decoder::{DecodeContext, DenomFallback, MessageRegistry};
use crate::utils::Bech32Config;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error("request did not complete within {timeout_ms} ms")]
    DeadlineExceeded { timeout_ms: u128 },
}

impl BackendError {
    fn chain(context: &str, err: ChainQueryError) -> Self {
        BackendError::Internal(format!("{context}: {err}"))
    }
}

/// Runs `operation` under the per-request deadline.
pub async fn with_deadline<T, F>(timeout: Duration, operation: F) -> Result<T, BackendError>
where
    F: Future<Output = Result<T, BackendError>>,
{
    tokio::time::timeout(timeout, operation)
        .await
        .unwrap_or_else(|_| {
            Err(BackendError::DeadlineExceeded {
                timeout_ms: timeout.as_millis(),
            })
        })
}

/// Entry point for every explorer operation.
pub struct ExplorerBackend {
    chain: Arc<dyn ChainQueryClient>,
    registry: MessageRegistry,
    addresses: Bech32Config,
    denom_fallback: DenomFallback,
}

impl ExplorerBackend {
    pub fn new(
        chain: Arc<dyn ChainQueryClient>,
        registry: MessageRegistry,
        addresses: Bech32Config,
        denom_fallback: DenomFallback,
    ) -> Self {
        Self {
            chain,
            registry,
            addresses,
            denom_fallback,
        }
    }

    pub fn chain(&self) -> &dyn ChainQueryClient {
        self.chain.as_ref()
    }

    pub fn addresses(&self) -> &Bech32Config {
        &self.addresses
    }

    fn decode_context<'a>(&'a self, tx_hash: &'a str) -> DecodeContext<'a> {
        DecodeContext::new(
            self.chain.as_ref(),
            &self.registry,
            &self.addresses,
            &self.denom_fallback,
            tx_hash,
        )
    }
}

#[cfg(test)]
pub(crate) fn test_backend(chain: crate::test_fixtures::MockChainClient) -> ExplorerBackend {
    ExplorerBackend::new(
        Arc::new(chain),
        MessageRegistry::standard(),
        crate::test_fixtures::test_addresses(),
        DenomFallback::default(),
    )
}
