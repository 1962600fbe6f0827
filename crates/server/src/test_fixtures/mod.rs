// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory chain client and helpers shared by the unit tests.

use crate::chain::{
    BlockWithTxs, ChainQueryClient, ChainQueryError, ChainStatus, DecodedTx, EventAttribute,
    TxEvent, TxExecResult, TxWithResult,
};
use crate::decoder::{
    DecodeContext, DenomFallback, ExtractError, InvolversSet, KnownMessage, MessageRegistry,
    ParseError, ParsedContent,
};
use crate::proto::bank::{DenomUnit, Metadata};
use crate::proto::distribution::{
    QueryDelegationTotalRewardsResponse, QueryValidatorCommissionResponse,
    QueryValidatorOutstandingRewardsResponse,
};
use crate::proto::gov::v1::QueryProposalsResponse;
use crate::proto::query::PageRequest;
use crate::proto::staking::QueryDelegatorDelegationsResponse;
use crate::proto::tx::{TxBody, TxRaw};
use crate::proto::Any;
use crate::utils::Bech32Config;
use async_trait::async_trait;
use bech32::{Bech32, Hrp};
use chrono::{DateTime, Utc};
use prost::Message;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Native hash used when a test does not care about the owning transaction.
pub const TEST_TX_HASH: &str = "A1B2C3D4E5F60718293A4B5C6D7E8F90A1B2C3D4E5F60718293A4B5C6D7E8F90";

pub const TEST_CHAIN_ID: &str = "cosmoshub-test";

pub fn test_addresses() -> Bech32Config {
    Bech32Config::new("cosmos", "cosmosvaloper")
}

fn encode_address(prefix: &str, seed: u8) -> String {
    let hrp = Hrp::parse(prefix).expect("valid prefix");
    bech32::encode::<Bech32>(hrp, &[seed; 20]).expect("valid address")
}

/// A valid `cosmos1...` account address derived from `seed`.
pub fn account_address(seed: u8) -> String {
    encode_address("cosmos", seed)
}

/// The validator operator address sharing its bytes with `account_address(seed)`.
pub fn validator_address(seed: u8) -> String {
    encode_address("cosmosvaloper", seed)
}

pub fn metadata_with_exponent(base: &str, display: &str, exponent: u32) -> Metadata {
    Metadata {
        description: String::new(),
        denom_units: vec![
            DenomUnit {
                denom: base.to_string(),
                exponent: 0,
                aliases: Vec::new(),
            },
            DenomUnit {
                denom: display.to_string(),
                exponent,
                aliases: Vec::new(),
            },
        ],
        base: base.to_string(),
        display: display.to_string(),
        name: display.to_string(),
        symbol: String::new(),
    }
}

pub fn event(kind: &str, attributes: &[(&str, &str)]) -> TxEvent {
    TxEvent {
        kind: kind.to_string(),
        attributes: attributes
            .iter()
            .map(|(key, value)| EventAttribute {
                key: key.to_string(),
                value: value.to_string(),
                index: true,
            })
            .collect(),
    }
}

pub fn exec_result(code: u32, events: Vec<TxEvent>) -> TxExecResult {
    TxExecResult {
        code,
        codespace: if code == 0 { String::new() } else { "sdk".into() },
        log: String::new(),
        gas_wanted: 200_000,
        gas_used: 150_000,
        events,
    }
}

/// A transaction as it would appear in a block, carrying `messages`.
pub fn decoded_tx(messages: Vec<Any>) -> DecodedTx {
    tx_from_body(TxBody {
        messages,
        ..Default::default()
    })
}

pub fn tx_from_body(body: TxBody) -> DecodedTx {
    let raw = TxRaw {
        body_bytes: body.encode_to_vec(),
        ..Default::default()
    }
    .encode_to_vec();
    DecodedTx::from_raw(&raw).expect("encoded tx decodes")
}

pub fn block(height: i64, txs: Vec<DecodedTx>) -> BlockWithTxs {
    BlockWithTxs {
        height,
        time: DateTime::<Utc>::from_timestamp(1_700_000_000 + height, 0).expect("valid time"),
        txs,
    }
}

fn injected(what: &str) -> ChainQueryError {
    ChainQueryError::MalformedResponse(format!("injected {what} failure"))
}

/// [`ChainQueryClient`] answering from fixed in-memory data.
///
/// Anything not configured is reported as absent, or as an empty response for
/// list queries.
#[derive(Default)]
pub struct MockChainClient {
    status: Option<ChainStatus>,
    blocks: HashMap<i64, BlockWithTxs>,
    failing_blocks: HashSet<i64>,
    txs: HashMap<String, TxWithResult>,
    tx_results: HashMap<String, TxExecResult>,
    failing_txs: HashSet<String>,
    denoms: HashMap<String, Metadata>,
    failing_denoms: HashSet<String>,
    proposals: QueryProposalsResponse,
    failing_proposals: bool,
    delegations: HashMap<String, QueryDelegatorDelegationsResponse>,
    rewards: HashMap<String, QueryDelegationTotalRewardsResponse>,
    commissions: HashMap<String, QueryValidatorCommissionResponse>,
    outstanding: HashMap<String, QueryValidatorOutstandingRewardsResponse>,
    failing_accounts: HashSet<String>,
    failing_validators: HashSet<String>,
    denom_metadata_calls: AtomicUsize,
    block_calls: AtomicUsize,
    last_pagination: Mutex<Option<PageRequest>>,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self) -> Self {
        self.status = Some(ChainStatus {
            network: TEST_CHAIN_ID.to_string(),
        });
        self
    }

    pub fn with_block(mut self, block: BlockWithTxs) -> Self {
        self.blocks.insert(block.height, block);
        self
    }

    pub fn failing_block(mut self, height: i64) -> Self {
        self.failing_blocks.insert(height);
        self
    }

    /// Registers a transaction findable by its native hash, with its execution result.
    pub fn with_tx(mut self, height: i64, tx: DecodedTx, result: TxExecResult) -> Self {
        let hash = tx.hash.clone();
        self.txs.insert(
            hash.clone(),
            TxWithResult {
                height,
                hash,
                tx,
                result,
            },
        );
        self
    }

    /// Execution result only, served by `tx_result`.
    pub fn with_tx_result(mut self, hash: &str, result: TxExecResult) -> Self {
        self.tx_results.insert(hash.to_string(), result);
        self
    }

    pub fn failing_tx(mut self, hash: &str) -> Self {
        self.failing_txs.insert(hash.to_string());
        self
    }

    pub fn with_denom_metadata(mut self, metadata: Metadata) -> Self {
        self.denoms.insert(metadata.base.clone(), metadata);
        self
    }

    pub fn failing_denom_metadata(mut self, denom: &str) -> Self {
        self.failing_denoms.insert(denom.to_string());
        self
    }

    pub fn with_proposals(mut self, proposals: QueryProposalsResponse) -> Self {
        self.proposals = proposals;
        self
    }

    pub fn failing_proposals(mut self) -> Self {
        self.failing_proposals = true;
        self
    }

    pub fn with_delegations(
        mut self,
        delegator: &str,
        delegations: QueryDelegatorDelegationsResponse,
    ) -> Self {
        self.delegations.insert(delegator.to_string(), delegations);
        self
    }

    pub fn with_rewards(mut self, delegator: &str, rewards: QueryDelegationTotalRewardsResponse) -> Self {
        self.rewards.insert(delegator.to_string(), rewards);
        self
    }

    /// Delegation and reward queries for `delegator` fail.
    pub fn failing_account(mut self, delegator: &str) -> Self {
        self.failing_accounts.insert(delegator.to_string());
        self
    }

    pub fn with_commission(
        mut self,
        validator: &str,
        commission: QueryValidatorCommissionResponse,
    ) -> Self {
        self.commissions.insert(validator.to_string(), commission);
        self
    }

    pub fn with_outstanding_rewards(
        mut self,
        validator: &str,
        rewards: QueryValidatorOutstandingRewardsResponse,
    ) -> Self {
        self.outstanding.insert(validator.to_string(), rewards);
        self
    }

    /// Commission and outstanding reward queries for `validator` fail.
    pub fn failing_validator(mut self, validator: &str) -> Self {
        self.failing_validators.insert(validator.to_string());
        self
    }

    pub fn denom_metadata_calls(&self) -> usize {
        self.denom_metadata_calls.load(Ordering::SeqCst)
    }

    pub fn block_calls(&self) -> usize {
        self.block_calls.load(Ordering::SeqCst)
    }

    pub fn last_pagination(&self) -> Option<PageRequest> {
        self.last_pagination
            .lock()
            .expect("pagination lock")
            .clone()
    }
}

#[async_trait]
impl ChainQueryClient for MockChainClient {
    async fn status(&self) -> Result<ChainStatus, ChainQueryError> {
        self.status.clone().ok_or_else(|| injected("status"))
    }

    async fn block_with_txs(&self, height: i64) -> Result<Option<BlockWithTxs>, ChainQueryError> {
        self.block_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_blocks.contains(&height) {
            return Err(injected("block"));
        }
        Ok(self.blocks.get(&height).cloned())
    }

    async fn tx_by_hash(&self, hash: &str) -> Result<Option<TxWithResult>, ChainQueryError> {
        if self.failing_txs.contains(hash) {
            return Err(injected("tx"));
        }
        Ok(self.txs.get(hash).cloned())
    }

    async fn tx_result(&self, hash: &str) -> Result<Option<TxExecResult>, ChainQueryError> {
        if self.failing_txs.contains(hash) {
            return Err(injected("tx"));
        }
        if let Some(result) = self.tx_results.get(hash) {
            return Ok(Some(result.clone()));
        }
        Ok(self.txs.get(hash).map(|tx| tx.result.clone()))
    }

    async fn denom_metadata(&self, denom: &str) -> Result<Option<Metadata>, ChainQueryError> {
        self.denom_metadata_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_denoms.contains(denom) {
            return Err(injected("denom metadata"));
        }
        Ok(self.denoms.get(denom).cloned())
    }

    async fn gov_proposals(
        &self,
        pagination: PageRequest,
    ) -> Result<QueryProposalsResponse, ChainQueryError> {
        *self.last_pagination.lock().expect("pagination lock") = Some(pagination);
        if self.failing_proposals {
            return Err(injected("proposals"));
        }
        Ok(self.proposals.clone())
    }

    async fn delegator_delegations(
        &self,
        delegator: &str,
    ) -> Result<QueryDelegatorDelegationsResponse, ChainQueryError> {
        if self.failing_accounts.contains(delegator) {
            return Err(injected("delegations"));
        }
        Ok(self.delegations.get(delegator).cloned().unwrap_or_default())
    }

    async fn delegation_total_rewards(
        &self,
        delegator: &str,
    ) -> Result<QueryDelegationTotalRewardsResponse, ChainQueryError> {
        if self.failing_accounts.contains(delegator) {
            return Err(injected("rewards"));
        }
        Ok(self.rewards.get(delegator).cloned().unwrap_or_default())
    }

    async fn validator_commission(
        &self,
        validator: &str,
    ) -> Result<QueryValidatorCommissionResponse, ChainQueryError> {
        if self.failing_validators.contains(validator) {
            return Err(injected("commission"));
        }
        Ok(self.commissions.get(validator).cloned().unwrap_or_default())
    }

    async fn validator_outstanding_rewards(
        &self,
        validator: &str,
    ) -> Result<QueryValidatorOutstandingRewardsResponse, ChainQueryError> {
        if self.failing_validators.contains(validator) {
            return Err(injected("outstanding rewards"));
        }
        Ok(self.outstanding.get(validator).cloned().unwrap_or_default())
    }
}

/// Runs a single message kind through its handlers against a mock chain.
pub struct DecodeHarness {
    chain: MockChainClient,
    registry: MessageRegistry,
    addresses: Bech32Config,
    fallback: DenomFallback,
}

impl DecodeHarness {
    pub fn new() -> Self {
        Self::with_chain(MockChainClient::new())
    }

    pub fn with_chain(chain: MockChainClient) -> Self {
        Self {
            chain,
            registry: MessageRegistry::standard(),
            addresses: test_addresses(),
            fallback: DenomFallback::default(),
        }
    }

    pub fn ctx(&self) -> DecodeContext<'_> {
        DecodeContext::new(
            &self.chain,
            &self.registry,
            &self.addresses,
            &self.fallback,
            TEST_TX_HASH,
        )
    }

    pub async fn parse<M: KnownMessage>(&self, msg: &M) -> Result<ParsedContent, ParseError> {
        msg.parse(&self.ctx()).await
    }

    pub async fn involvers<M: KnownMessage>(&self, msg: &M) -> Result<InvolversSet, ExtractError> {
        msg.involvers(&self.ctx()).await
    }
}
