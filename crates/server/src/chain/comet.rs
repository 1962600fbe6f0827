// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! [`ChainQueryClient`] over CometBFT JSON-RPC.
//!
//! Block and transaction data come from the `status`, `block` and `tx` methods.
//! Module queries (bank, gov, staking, distribution) go through `abci_query`
//! with protobuf-encoded gRPC requests.

use super::{
    BlockWithTxs, ChainQueryClient, ChainQueryError, ChainStatus, DecodedTx, EventAttribute,
    TxEvent, TxExecResult, TxWithResult,
};
use crate::proto::bank::{Metadata, QueryDenomMetadataRequest, QueryDenomMetadataResponse};
use crate::proto::distribution::{
    QueryDelegationTotalRewardsRequest, QueryDelegationTotalRewardsResponse,
    QueryValidatorCommissionRequest, QueryValidatorCommissionResponse,
    QueryValidatorOutstandingRewardsRequest, QueryValidatorOutstandingRewardsResponse,
};
use crate::proto::gov::v1::{QueryProposalsRequest, QueryProposalsResponse};
use crate::proto::query::PageRequest;
use crate::proto::staking::{QueryDelegatorDelegationsRequest, QueryDelegatorDelegationsResponse};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use prost::Message;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const DENOM_METADATA_PATH: &str = "/cosmos.bank.v1beta1.Query/DenomMetadata";
const GOV_PROPOSALS_PATH: &str = "/cosmos.gov.v1.Query/Proposals";
const DELEGATOR_DELEGATIONS_PATH: &str = "/cosmos.staking.v1beta1.Query/DelegatorDelegations";
const DELEGATION_TOTAL_REWARDS_PATH: &str =
    "/cosmos.distribution.v1beta1.Query/DelegationTotalRewards";
const VALIDATOR_COMMISSION_PATH: &str = "/cosmos.distribution.v1beta1.Query/ValidatorCommission";
const VALIDATOR_OUTSTANDING_REWARDS_PATH: &str =
    "/cosmos.distribution.v1beta1.Query/ValidatorOutstandingRewards";

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<String>,
}

impl RpcErrorBody {
    fn is_not_found(&self) -> bool {
        self.data
            .as_deref()
            .is_some_and(|data| data.contains("not found"))
    }
}

#[derive(Deserialize)]
struct StatusResult {
    node_info: NodeInfo,
}

#[derive(Deserialize)]
struct NodeInfo {
    network: String,
}

#[derive(Deserialize)]
struct BlockResult {
    block: Option<RawBlock>,
}

#[derive(Deserialize)]
struct RawBlock {
    header: RawHeader,
    data: RawBlockData,
}

#[derive(Deserialize)]
struct RawHeader {
    height: String,
    time: String,
}

#[derive(Deserialize)]
struct RawBlockData {
    #[serde(default)]
    txs: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct TxResult {
    hash: String,
    height: String,
    tx_result: RawExecResult,
    tx: String,
}

#[derive(Deserialize)]
struct RawExecResult {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    codespace: String,
    #[serde(default)]
    log: String,
    #[serde(default)]
    gas_wanted: Option<String>,
    #[serde(default)]
    gas_used: Option<String>,
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    attributes: Vec<RawAttribute>,
}

#[derive(Deserialize)]
struct RawAttribute {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    index: bool,
}

#[derive(Deserialize)]
struct AbciQueryResult {
    response: AbciResponse,
}

#[derive(Deserialize)]
struct AbciResponse {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    value: Option<String>,
}

fn parse_height(field: &str, raw: &str) -> Result<i64, ChainQueryError> {
    raw.parse()
        .map_err(|_| ChainQueryError::MalformedResponse(format!("{field} is not an integer: {raw}")))
}

impl From<RawExecResult> for TxExecResult {
    fn from(raw: RawExecResult) -> Self {
        let parse_gas = |gas: Option<String>| gas.and_then(|g| g.parse().ok()).unwrap_or_default();
        Self {
            code: raw.code,
            codespace: raw.codespace,
            log: raw.log,
            gas_wanted: parse_gas(raw.gas_wanted),
            gas_used: parse_gas(raw.gas_used),
            events: raw
                .events
                .into_iter()
                .map(|event| TxEvent {
                    kind: event.kind,
                    attributes: event
                        .attributes
                        .into_iter()
                        .map(|attr| EventAttribute {
                            key: attr.key.unwrap_or_default(),
                            value: attr.value.unwrap_or_default(),
                            index: attr.index,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// JSON-RPC client for a CometBFT node.
#[derive(Debug)]
pub struct CometRpcClient {
    http: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl CometRpcClient {
    /// `timeout` bounds every single HTTP round trip.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ChainQueryError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ChainQueryError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Performs a JSON-RPC call. `Ok(None)` when the node reports the item as not found.
    async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<Option<R>, ChainQueryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let transport = |source| ChainQueryError::Transport {
            endpoint: format!("{}#{method}", self.endpoint),
            source,
        };
        let response: RpcResponse<R> = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)?;

        match (response.result, response.error) {
            (_, Some(error)) if error.is_not_found() => Ok(None),
            (_, Some(error)) => Err(ChainQueryError::Rpc {
                code: error.code,
                message: error.message,
                data: error.data,
            }),
            (Some(result), None) => Ok(Some(result)),
            (None, None) => Err(ChainQueryError::MalformedResponse(format!(
                "{method} returned neither result nor error"
            ))),
        }
    }

    async fn required<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<R, ChainQueryError> {
        self.call(method, params).await?.ok_or_else(|| {
            ChainQueryError::MalformedResponse(format!("{method} reported not found"))
        })
    }

    /// Runs a gRPC query through `abci_query`. `Ok(None)` when the query returns a non-zero code.
    async fn abci_query<Req, Resp>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Option<Resp>, ChainQueryError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let result: AbciQueryResult = self
            .required(
                "abci_query",
                json!({
                    "path": path,
                    "data": hex::encode(request.encode_to_vec()),
                    "height": "0",
                    "prove": false,
                }),
            )
            .await?;

        if result.response.code != 0 {
            tracing::debug!(
                path,
                code = result.response.code,
                log = %result.response.log,
                "ABCI query returned a non-zero code"
            );
            return Ok(None);
        }

        let value = BASE64.decode(result.response.value.unwrap_or_default())?;
        Ok(Some(Resp::decode(value.as_slice())?))
    }

    async fn abci_query_required<Req, Resp>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp, ChainQueryError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        // Repeat the query outcome as an error so callers see the failing path.
        self.abci_query(path, request)
            .await?
            .ok_or_else(|| ChainQueryError::Abci {
                path: path.to_string(),
                code: 1,
                log: "query returned no result".to_string(),
            })
    }

    fn decode_tx(raw_base64: &str) -> Result<DecodedTx, ChainQueryError> {
        let raw = BASE64.decode(raw_base64)?;
        Ok(DecodedTx::from_raw(&raw)?)
    }
}

#[async_trait]
impl ChainQueryClient for CometRpcClient {
    async fn status(&self) -> Result<ChainStatus, ChainQueryError> {
        let status: StatusResult = self.required("status", json!({})).await?;
        Ok(ChainStatus {
            network: status.node_info.network,
        })
    }

    async fn block_with_txs(&self, height: i64) -> Result<Option<BlockWithTxs>, ChainQueryError> {
        let Some(result) = self
            .call::<BlockResult>("block", json!({ "height": height.to_string() }))
            .await?
        else {
            return Ok(None);
        };
        let Some(block) = result.block else {
            return Ok(None);
        };

        let time = DateTime::parse_from_rfc3339(&block.header.time)
            .map_err(|e| {
                ChainQueryError::MalformedResponse(format!(
                    "block time {} is not RFC 3339: {e}",
                    block.header.time
                ))
            })?
            .with_timezone(&Utc);

        let txs = block
            .data
            .txs
            .unwrap_or_default()
            .iter()
            .map(|raw| Self::decode_tx(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(BlockWithTxs {
            height: parse_height("block height", &block.header.height)?,
            time,
            txs,
        }))
    }

    async fn tx_by_hash(&self, hash: &str) -> Result<Option<TxWithResult>, ChainQueryError> {
        let hash_bytes = hex::decode(hash)
            .map_err(|e| ChainQueryError::MalformedResponse(format!("invalid tx hash: {e}")))?;
        let Some(result) = self
            .call::<TxResult>(
                "tx",
                json!({ "hash": BASE64.encode(hash_bytes), "prove": false }),
            )
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(TxWithResult {
            height: parse_height("tx height", &result.height)?,
            hash: result.hash.to_uppercase(),
            tx: Self::decode_tx(&result.tx)?,
            result: result.tx_result.into(),
        }))
    }

    async fn tx_result(&self, hash: &str) -> Result<Option<TxExecResult>, ChainQueryError> {
        Ok(self.tx_by_hash(hash).await?.map(|tx| tx.result))
    }

    async fn denom_metadata(&self, denom: &str) -> Result<Option<Metadata>, ChainQueryError> {
        let response: Option<QueryDenomMetadataResponse> = self
            .abci_query(
                DENOM_METADATA_PATH,
                &QueryDenomMetadataRequest {
                    denom: denom.to_string(),
                },
            )
            .await?;
        Ok(response.and_then(|r| r.metadata))
    }

    async fn gov_proposals(
        &self,
        pagination: PageRequest,
    ) -> Result<QueryProposalsResponse, ChainQueryError> {
        self.abci_query_required(
            GOV_PROPOSALS_PATH,
            &QueryProposalsRequest {
                pagination: Some(pagination),
                ..Default::default()
            },
        )
        .await
    }

    async fn delegator_delegations(
        &self,
        delegator: &str,
    ) -> Result<QueryDelegatorDelegationsResponse, ChainQueryError> {
        self.abci_query_required(
            DELEGATOR_DELEGATIONS_PATH,
            &QueryDelegatorDelegationsRequest {
                delegator_addr: delegator.to_string(),
                pagination: None,
            },
        )
        .await
    }

    async fn delegation_total_rewards(
        &self,
        delegator: &str,
    ) -> Result<QueryDelegationTotalRewardsResponse, ChainQueryError> {
        self.abci_query_required(
            DELEGATION_TOTAL_REWARDS_PATH,
            &QueryDelegationTotalRewardsRequest {
                delegator_address: delegator.to_string(),
            },
        )
        .await
    }

    async fn validator_commission(
        &self,
        validator: &str,
    ) -> Result<QueryValidatorCommissionResponse, ChainQueryError> {
        self.abci_query_required(
            VALIDATOR_COMMISSION_PATH,
            &QueryValidatorCommissionRequest {
                validator_address: validator.to_string(),
            },
        )
        .await
    }

    async fn validator_outstanding_rewards(
        &self,
        validator: &str,
    ) -> Result<QueryValidatorOutstandingRewardsResponse, ChainQueryError> {
        self.abci_query_required(
            VALIDATOR_OUTSTANDING_REWARDS_PATH,
            &QueryValidatorOutstandingRewardsRequest {
                validator_address: validator.to_string(),
            },
        )
        .await
    }
}
