// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Query services of the chain node the explorer reads from.
//!
//! Everything the decoder needs from the chain goes through [`ChainQueryClient`],
//! so the decoding logic can be exercised against in-memory fixtures.

mod comet;
mod error;

pub use comet::CometRpcClient;
pub use error::ChainQueryError;

use crate::proto::bank::Metadata;
use crate::proto::distribution::{
    QueryDelegationTotalRewardsResponse, QueryValidatorCommissionResponse,
    QueryValidatorOutstandingRewardsResponse,
};
use crate::proto::gov::v1::QueryProposalsResponse;
use crate::proto::query::PageRequest;
use crate::proto::staking::QueryDelegatorDelegationsResponse;
use crate::proto::tx::{TxBody, TxRaw};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prost::Message;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,
}

/// An ABCI event emitted while executing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Vec<EventAttribute>,
}

impl TxEvent {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }
}

/// A transaction as found in a block, with its body decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTx {
    /// Upper-case hex SHA-256 of the raw transaction bytes.
    pub hash: String,
    pub body: TxBody,
}

impl DecodedTx {
    /// Decodes the raw `TxRaw` bytes of a transaction.
    pub fn from_raw(raw: &[u8]) -> Result<Self, prost::DecodeError> {
        let tx_raw = TxRaw::decode(raw)?;
        let body = TxBody::decode(tx_raw.body_bytes.as_slice())?;
        Ok(Self {
            hash: native_tx_hash(raw),
            body,
        })
    }
}

/// CometBFT transaction hash: upper-case hex SHA-256 of the raw bytes.
pub fn native_tx_hash(raw: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(raw))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockWithTxs {
    pub height: i64,
    pub time: DateTime<Utc>,
    pub txs: Vec<DecodedTx>,
}

/// Execution outcome of a transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TxExecResult {
    pub code: u32,
    pub codespace: String,
    pub log: String,
    pub gas_wanted: i64,
    pub gas_used: i64,
    pub events: Vec<TxEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TxWithResult {
    pub height: i64,
    pub hash: String,
    pub tx: DecodedTx,
    pub result: TxExecResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStatus {
    /// Chain id as reported by the node.
    pub network: String,
}

/// Read-only queries against a chain node.
///
/// Each call is independent and fails on its own; implementations do not retry.
/// `Ok(None)` means the node answered and the item does not exist.
#[async_trait]
pub trait ChainQueryClient: Send + Sync {
    async fn status(&self) -> Result<ChainStatus, ChainQueryError>;

    async fn block_with_txs(&self, height: i64) -> Result<Option<BlockWithTxs>, ChainQueryError>;

    /// Looks up a transaction by its upper-case hex hash, without `0x`.
    async fn tx_by_hash(&self, hash: &str) -> Result<Option<TxWithResult>, ChainQueryError>;

    /// Execution result only, for a transaction known by its native hash.
    async fn tx_result(&self, hash: &str) -> Result<Option<TxExecResult>, ChainQueryError>;

    async fn denom_metadata(&self, denom: &str) -> Result<Option<Metadata>, ChainQueryError>;

    async fn gov_proposals(
        &self,
        pagination: PageRequest,
    ) -> Result<QueryProposalsResponse, ChainQueryError>;

    async fn delegator_delegations(
        &self,
        delegator: &str,
    ) -> Result<QueryDelegatorDelegationsResponse, ChainQueryError>;

    async fn delegation_total_rewards(
        &self,
        delegator: &str,
    ) -> Result<QueryDelegationTotalRewardsResponse, ChainQueryError>;

    async fn validator_commission(
        &self,
        validator: &str,
    ) -> Result<QueryValidatorCommissionResponse, ChainQueryError>;

    async fn validator_outstanding_rewards(
        &self,
        validator: &str,
    ) -> Result<QueryValidatorOutstandingRewardsResponse, ChainQueryError>;
}
