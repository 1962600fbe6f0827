// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BackendError, ExplorerBackend};
use crate::chain::{DecodedTx, TxEvent};
use crate::decoder::evm::{evm_tx_hash_from_events, is_evm_tx};
use crate::decoder::message::proto_name;
use crate::decoder::{DecodeContext, FriendlyFragment, InvolversSet};
use crate::proto::Any;
use crate::types::TxHash;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Most heights scanned by one block-range call.
pub const MAX_BLOCK_RANGE: i64 = 100;

/// Heights to scan, after validation and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub from: i64,
    pub to: i64,
    /// Requested heights beyond the page cap, inclusive.
    pub skipped: Option<[i64; 2]>,
}

/// Validates a requested range; `to == 0` means a single height.
pub fn plan_block_range(from: i64, to: i64) -> Result<BlockRange, BackendError> {
    let to = if to == 0 { from } else { to };
    if from <= 0 || to <= 0 || from > to {
        return Err(BackendError::BadRequest(format!(
            "invalid block range {from}..={to}"
        )));
    }

    if to - from + 1 > MAX_BLOCK_RANGE {
        let clamped = from + MAX_BLOCK_RANGE - 1;
        return Ok(BlockRange {
            from,
            to: clamped,
            skipped: Some([clamped + 1, to]),
        });
    }
    Ok(BlockRange {
        from,
        to,
        skipped: None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Cosmos,
    Evm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTxRecord {
    pub hash: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub involvers: InvolversSet,
    /// Type URLs of the messages, in order.
    pub message_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockTxs {
    #[serde(rename = "timeEpochUTC")]
    pub time_epoch_utc: i64,
    pub txs: Vec<BlockTxRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockScanResult {
    pub chain_id: String,
    pub blocks: BTreeMap<i64, BlockTxs>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub missing_blocks: BTreeSet<i64>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub error_blocks: BTreeSet<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_range: Option<[i64; 2]>,
}

impl BlockScanResult {
    pub fn tx_count(&self) -> usize {
        self.blocks.values().map(|block| block.txs.len()).sum()
    }
}

/// One message of a transaction, decoded as far as possible.
///
/// Exactly one of `content` and `content_error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    pub index: usize,
    /// Proto message name, without the leading `/` of the type URL.
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_error: Option<String>,
    pub friendly_text: String,
    pub friendly_fragments: Vec<FriendlyFragment>,
}

impl ParsedMessage {
    fn failed(index: usize, type_tag: &str, error: String) -> Self {
        Self {
            index,
            type_tag: type_tag.to_string(),
            content: None,
            content_error: Some(error),
            friendly_text: String::new(),
            friendly_fragments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResultSummary {
    pub code: u32,
    pub success: bool,
    pub gas_limit: i64,
    pub gas_used: i64,
    pub events: Vec<TxEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxResponse {
    pub height: i64,
    pub hash: String,
    pub messages: Vec<ParsedMessage>,
    pub result: TxResultSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Outcome of scanning one transaction of a block.
enum TxScan {
    Record(BlockTxRecord),
    /// A message could not be unpacked; the whole height is dropped.
    Undecodable,
}

impl ExplorerBackend {
    /// Transactions of every height in `[from, to]`, with per-height failures reported inline.
    pub async fn transactions_in_block_range(
        &self,
        from: i64,
        to: i64,
    ) -> Result<BlockScanResult, BackendError> {
        let range = plan_block_range(from, to)?;

        let status = self
            .chain()
            .status()
            .await
            .map_err(|e| BackendError::chain("failed to get chain status", e))?;

        let mut result = BlockScanResult {
            chain_id: status.network,
            blocks: BTreeMap::new(),
            missing_blocks: BTreeSet::new(),
            error_blocks: BTreeSet::new(),
            skipped_range: range.skipped,
        };

        'heights: for height in range.from..=range.to {
            let block = match self.chain().block_with_txs(height).await {
                Ok(Some(block)) => block,
                Ok(None) => {
                    tracing::error!(height, "Block not found");
                    result.missing_blocks.insert(height);
                    continue;
                }
                Err(e) => {
                    tracing::error!(height, error = %e, "Failed to get block");
                    result.missing_blocks.insert(height);
                    continue;
                }
            };

            let mut txs = Vec::with_capacity(block.txs.len());
            for tx in &block.txs {
                match self.scan_tx(tx).await {
                    TxScan::Record(record) => txs.push(record),
                    TxScan::Undecodable => {
                        result.error_blocks.insert(height);
                        continue 'heights;
                    }
                }
            }

            result.blocks.insert(
                height,
                BlockTxs {
                    time_epoch_utc: block.time.timestamp(),
                    txs,
                },
            );
        }

        Ok(result)
    }

    async fn scan_tx(&self, tx: &DecodedTx) -> TxScan {
        let mut hash = tx.hash.clone();
        let mut kind = TxKind::Cosmos;

        if is_evm_tx(&tx.body) {
            match self.chain().tx_result(&tx.hash).await {
                Ok(Some(result)) => {
                    if let Some(evm_hash) = evm_tx_hash_from_events(&result.events) {
                        hash = evm_hash;
                        kind = TxKind::Evm;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(tx_hash = %tx.hash, error = %e, "Failed to query EVM tx result");
                }
            }
        }

        let ctx = self.decode_context(&tx.hash);
        let mut involvers = InvolversSet::new();
        let mut message_types = Vec::with_capacity(tx.body.messages.len());

        for any in &tx.body.messages {
            message_types.push(any.type_url.clone());

            let msg = match self.registry.unpack(any) {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!(tx_hash = %tx.hash, error = %e, "Failed to unpack message");
                    return TxScan::Undecodable;
                }
            };

            // The record keeps the involvers of the last message that yielded any.
            match self
                .registry
                .resolve_extractor(msg.type_url())
                .extract(msg.as_ref(), &ctx)
                .await
            {
                Ok(found) => involvers = found,
                Err(e) => {
                    tracing::debug!(tx_hash = %tx.hash, error = %e, "Failed to extract message involvers");
                }
            }
        }

        TxScan::Record(BlockTxRecord {
            hash,
            kind,
            involvers,
            message_types,
        })
    }

    /// A transaction with every message decoded; `hash` may carry a `0x` prefix and any case.
    pub async fn transaction_by_hash(&self, hash: &str) -> Result<TxResponse, BackendError> {
        let hash = TxHash::parse(hash).map_err(|e| BackendError::BadRequest(e.to_string()))?;
        tracing::debug!(tx_hash = %hash, "Looking up transaction");

        let found = self
            .chain()
            .tx_by_hash(&hash.to_native())
            .await
            .map_err(|e| BackendError::chain("failed to get transaction", e))?
            .ok_or_else(|| BackendError::NotFound("transaction not found".to_string()))?;

        let ctx = self.decode_context(&found.hash);
        let mut messages = Vec::with_capacity(found.tx.body.messages.len());
        for (index, any) in found.tx.body.messages.iter().enumerate() {
            messages.push(self.parse_message(index, any, &ctx).await);
        }

        let body = &found.tx.body;
        Ok(TxResponse {
            height: found.height,
            hash: found.hash.clone(),
            messages,
            result: TxResultSummary {
                code: found.result.code,
                success: found.result.code == 0,
                gas_limit: found.result.gas_wanted,
                gas_used: found.result.gas_used,
                events: found.result.events.clone(),
            },
            memo: (!body.memo.is_empty()).then(|| body.memo.clone()),
        })
    }

    async fn parse_message(&self, index: usize, any: &Any, ctx: &DecodeContext<'_>) -> ParsedMessage {
        let msg = match self.registry.unpack(any) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::error!(tx_hash = ctx.tx_hash, index, error = %e, "Failed to unpack message");
                return ParsedMessage::failed(index, proto_name(&any.type_url), e.to_string());
            }
        };

        match self
            .registry
            .resolve_parser(msg.type_url())
            .parse(msg.as_ref(), ctx)
            .await
        {
            Ok(parsed) => ParsedMessage {
                index,
                type_tag: msg.proto_name().to_string(),
                content: Some(parsed.content),
                content_error: None,
                friendly_text: parsed.friendly.text,
                friendly_fragments: parsed.friendly.fragments,
            },
            Err(e) => ParsedMessage::failed(index, msg.proto_name(), e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_backend;
    use crate::decoder::InvolverRole;
    use crate::proto::bank::MsgSend;
    use crate::proto::ethermint::{EXTENSION_OPTIONS_ETHEREUM_TX, MsgEthereumTx};
    use crate::proto::slashing::MsgUnjail;
    use crate::proto::tx::TxBody;
    use crate::proto::{Coin, TypeUrl, to_any};
    use crate::test_fixtures::{
        MockChainClient, TEST_CHAIN_ID, account_address, block, decoded_tx, event, exec_result,
        tx_from_body,
    };
    use serde_json::json;

    fn send(from: &str, to: &str) -> Any {
        to_any(&MsgSend {
            from_address: from.into(),
            to_address: to.into(),
            amount: vec![Coin::new("5", "uatom")],
        })
    }

    fn wasm_execute() -> Any {
        Any {
            type_url: "/cosmwasm.wasm.v1.MsgExecuteContract".into(),
            value: vec![0x0a, 0x03, b'a', b'b', b'c'],
        }
    }

    fn garbage() -> Any {
        Any {
            type_url: MsgSend::TYPE_URL.into(),
            value: vec![0xff, 0xff],
        }
    }

    #[test]
    fn range_is_clamped_to_page_cap() {
        let range = plan_block_range(10, 250).unwrap();
        assert_eq!(range.from, 10);
        assert_eq!(range.to, 109);
        assert_eq!(range.skipped, Some([110, 250]));
    }

    #[test]
    fn range_of_exactly_page_cap_is_not_clamped() {
        let range = plan_block_range(1, 100).unwrap();
        assert_eq!((range.from, range.to, range.skipped), (1, 100, None));
    }

    #[test]
    fn zero_upper_bound_means_single_height() {
        let range = plan_block_range(7, 0).unwrap();
        assert_eq!((range.from, range.to), (7, 7));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        for (from, to) in [(5, 2), (0, 3), (-1, 0), (0, 0)] {
            assert!(
                matches!(plan_block_range(from, to), Err(BackendError::BadRequest(_))),
                "{from}..{to}"
            );
        }
    }

    #[tokio::test]
    async fn scan_of_wide_range_covers_first_page_only() {
        let mut chain = MockChainClient::new().with_status();
        for height in 10..=250 {
            chain = chain.with_block(block(height, Vec::new()));
        }
        let backend = test_backend(chain);

        let result = backend.transactions_in_block_range(10, 250).await.unwrap();

        assert_eq!(result.blocks.len(), 100);
        assert_eq!(result.blocks.keys().next(), Some(&10));
        assert_eq!(result.blocks.keys().last(), Some(&109));
        assert_eq!(result.skipped_range, Some([110, 250]));
        assert_eq!(result.chain_id, TEST_CHAIN_ID);
    }

    #[tokio::test]
    async fn inverted_range_fails_before_querying_chain() {
        let backend = test_backend(MockChainClient::new());
        let err = backend.transactions_in_block_range(5, 2).await.unwrap_err();
        assert!(matches!(err, BackendError::BadRequest(_)));
    }

    #[tokio::test]
    async fn status_failure_is_internal() {
        let backend = test_backend(MockChainClient::new());
        let err = backend.transactions_in_block_range(1, 1).await.unwrap_err();
        assert!(matches!(err, BackendError::Internal(_)));
    }

    #[tokio::test]
    async fn per_height_failures_are_partitioned() {
        let alice = account_address(1);
        let bob = account_address(2);
        let good = decoded_tx(vec![send(&alice, &bob)]);
        let chain = MockChainClient::new()
            .with_status()
            .with_block(block(1, vec![good.clone()]))
            .failing_block(2)
            .with_block(block(4, vec![good.clone(), decoded_tx(vec![garbage()])]));
        let backend = test_backend(chain);

        let result = backend.transactions_in_block_range(1, 4).await.unwrap();

        assert_eq!(result.blocks.keys().copied().collect::<Vec<_>>(), [1]);
        assert_eq!(result.missing_blocks.iter().copied().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(result.error_blocks.iter().copied().collect::<Vec<_>>(), [4]);

        let record = &result.blocks[&1].txs[0];
        assert_eq!(record.hash, good.hash);
        assert_eq!(record.kind, TxKind::Cosmos);
        assert_eq!(record.message_types, ["/cosmos.bank.v1beta1.MsgSend"]);
        assert!(record.involvers.contains(InvolverRole::Generic, &alice));
        assert!(record.involvers.contains(InvolverRole::Generic, &bob));
        assert_eq!(result.blocks[&1].time_epoch_utc, 1_700_000_001);
    }

    #[tokio::test]
    async fn unregistered_message_types_fall_back_to_event_involvers() {
        let contract = account_address(9);
        let tx = decoded_tx(vec![wasm_execute()]);
        let chain = MockChainClient::new()
            .with_status()
            .with_block(block(3, vec![tx.clone()]))
            .with_tx_result(
                &tx.hash,
                exec_result(0, vec![event("execute", &[("_contract_address", contract.as_str())])]),
            );
        let backend = test_backend(chain);

        let result = backend.transactions_in_block_range(3, 3).await.unwrap();

        assert!(result.error_blocks.is_empty());
        let record = &result.blocks[&3].txs[0];
        assert_eq!(record.message_types, ["/cosmwasm.wasm.v1.MsgExecuteContract"]);
        assert!(record.involvers.contains(InvolverRole::Generic, &contract));
    }

    #[tokio::test]
    async fn tx_record_keeps_involvers_of_last_message_only() {
        // Involvers are overwritten per message rather than merged.
        let (a, b, c, d) = (
            account_address(1),
            account_address(2),
            account_address(3),
            account_address(4),
        );
        let tx = decoded_tx(vec![send(&a, &b), send(&c, &d)]);
        let chain = MockChainClient::new()
            .with_status()
            .with_block(block(3, vec![tx]));
        let backend = test_backend(chain);

        let result = backend.transactions_in_block_range(3, 0).await.unwrap();
        let record = &result.blocks[&3].txs[0];

        let generic = record.involvers.get(InvolverRole::Generic).unwrap();
        assert_eq!(generic.len(), 2);
        assert!(record.involvers.contains(InvolverRole::Generic, &c));
        assert!(record.involvers.contains(InvolverRole::Generic, &d));
        assert!(!record.involvers.contains(InvolverRole::Generic, &a));
        assert_eq!(record.message_types.len(), 2);
    }

    #[tokio::test]
    async fn evm_tx_is_reported_under_its_ethereum_hash() {
        let evm_hash = format!("0x{}", "AB".repeat(32));
        let tx = tx_from_body(TxBody {
            messages: vec![to_any(&MsgEthereumTx {
                data: None,
                size: 0.0,
                hash: evm_hash.clone(),
                from: "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".into(),
            })],
            extension_options: vec![Any {
                type_url: EXTENSION_OPTIONS_ETHEREUM_TX.into(),
                value: Vec::new(),
            }],
            ..Default::default()
        });
        let chain = MockChainClient::new()
            .with_status()
            .with_block(block(5, vec![tx.clone()]))
            .with_tx_result(
                &tx.hash,
                exec_result(0, vec![event("ethereum_tx", &[("ethereumTxHash", evm_hash.as_str())])]),
            );
        let backend = test_backend(chain);

        let result = backend.transactions_in_block_range(5, 5).await.unwrap();
        let record = &result.blocks[&5].txs[0];

        assert_eq!(record.kind, TxKind::Evm);
        assert_eq!(record.hash, evm_hash.to_lowercase());
        assert!(record.involvers.contains(
            InvolverRole::Evm,
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        ));
    }

    #[tokio::test]
    async fn evm_tx_without_result_keeps_native_hash() {
        let tx = tx_from_body(TxBody {
            messages: vec![to_any(&MsgEthereumTx::default())],
            ..Default::default()
        });
        let chain = MockChainClient::new()
            .with_status()
            .failing_tx(&tx.hash)
            .with_block(block(5, vec![tx.clone()]));
        let backend = test_backend(chain);

        let result = backend.transactions_in_block_range(5, 5).await.unwrap();
        let record = &result.blocks[&5].txs[0];
        assert_eq!(record.kind, TxKind::Cosmos);
        assert_eq!(record.hash, tx.hash);
    }

    #[tokio::test]
    async fn scan_result_serializes_with_explorer_field_names() {
        let chain = MockChainClient::new()
            .with_status()
            .with_block(block(1, Vec::new()))
            .failing_block(2);
        let backend = test_backend(chain);

        let result = backend.transactions_in_block_range(1, 2).await.unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            json!({
                "chainId": TEST_CHAIN_ID,
                "blocks": { "1": { "timeEpochUTC": 1_700_000_001, "txs": [] } },
                "missingBlocks": [2],
            })
        );
    }

    #[tokio::test]
    async fn tx_by_hash_decodes_every_message() {
        let alice = account_address(1);
        let tx = TxBody {
            messages: vec![
                send(&alice, "cosmos1bob"),
                garbage(),
                to_any(&MsgUnjail {
                    validator_addr: "cosmosvaloper1x".into(),
                }),
            ],
            memo: "thanks".into(),
            ..Default::default()
        };
        let tx = tx_from_body(tx);
        let chain = MockChainClient::new().with_tx(42, tx.clone(), exec_result(0, Vec::new()));
        let backend = test_backend(chain);

        let query = format!("0x{}", tx.hash.to_lowercase());
        let response = backend.transaction_by_hash(&query).await.unwrap();

        assert_eq!(response.height, 42);
        assert_eq!(response.hash, tx.hash);
        assert_eq!(response.memo.as_deref(), Some("thanks"));
        assert!(response.result.success);
        assert_eq!(response.result.gas_limit, 200_000);
        assert_eq!(response.messages.len(), 3);

        let first = &response.messages[0];
        assert_eq!(first.type_tag, "cosmos.bank.v1beta1.MsgSend");
        assert!(first.content.is_some() && first.content_error.is_none());
        assert_eq!(
            first
                .friendly_fragments
                .iter()
                .map(FriendlyFragment::value)
                .collect::<String>(),
            first.friendly_text
        );

        let second = &response.messages[1];
        assert_eq!(second.index, 1);
        assert!(second.content.is_none());
        assert!(second.content_error.is_some());

        assert_eq!(response.messages[2].friendly_text, "cosmosvaloper1x un-jails");
    }

    #[tokio::test]
    async fn tx_by_hash_reports_unregistered_types_as_unsupported() {
        let tx = decoded_tx(vec![wasm_execute(), send("a", "b")]);
        let chain = MockChainClient::new().with_tx(7, tx.clone(), exec_result(0, Vec::new()));
        let backend = test_backend(chain);

        let response = backend.transaction_by_hash(&tx.hash).await.unwrap();

        let unknown = &response.messages[0];
        assert_eq!(unknown.type_tag, "cosmwasm.wasm.v1.MsgExecuteContract");
        assert!(unknown.content.is_none());
        assert_eq!(
            unknown.content_error.as_deref(),
            Some("not supported message type cosmwasm.wasm.v1.MsgExecuteContract")
        );
        assert!(response.messages[1].content.is_some());
    }

    #[tokio::test]
    async fn tx_by_hash_reports_failed_execution() {
        let tx = decoded_tx(vec![send("a", "b")]);
        let chain = MockChainClient::new().with_tx(1, tx.clone(), exec_result(5, Vec::new()));
        let backend = test_backend(chain);

        let response = backend.transaction_by_hash(&tx.hash).await.unwrap();
        assert_eq!(response.result.code, 5);
        assert!(!response.result.success);
        assert!(response.memo.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("memo").is_none());
        assert_eq!(json["result"]["gasUsed"], 150_000);
        assert_eq!(json["messages"][0]["type"], "cosmos.bank.v1beta1.MsgSend");
    }

    #[tokio::test]
    async fn tx_by_hash_error_taxonomy() {
        let backend = test_backend(MockChainClient::new().failing_tx(&"AB".repeat(32)));

        assert!(matches!(
            backend.transaction_by_hash("not-a-hash").await,
            Err(BackendError::BadRequest(_))
        ));
        assert!(matches!(
            backend.transaction_by_hash(&"CD".repeat(32)).await,
            Err(BackendError::NotFound(_))
        ));
        assert!(matches!(
            backend.transaction_by_hash(&format!("0x{}", "ab".repeat(32))).await,
            Err(BackendError::Internal(_))
        ));
    }
}
