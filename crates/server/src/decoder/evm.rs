// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recognition of Ethermint-style EVM transactions.

use crate::chain::TxEvent;
use crate::proto::TypeUrl;
use crate::proto::ethermint::{EXTENSION_OPTIONS_ETHEREUM_TX, MsgEthereumTx};
use crate::proto::tx::TxBody;
use crate::types::TxHash;

const ETHEREUM_TX_EVENT: &str = "ethereum_tx";
const ETHEREUM_TX_HASH_ATTRIBUTE: &str = "ethereumTxHash";

/// Whether the transaction wraps an Ethereum transaction.
pub fn is_evm_tx(body: &TxBody) -> bool {
    body.messages
        .iter()
        .any(|msg| msg.type_url == MsgEthereumTx::TYPE_URL)
        || body
            .extension_options
            .iter()
            .any(|option| option.type_url == EXTENSION_OPTIONS_ETHEREUM_TX)
}

/// The Ethereum transaction hash announced in the execution events, as lower-case `0x` hex.
pub fn evm_tx_hash_from_events(events: &[TxEvent]) -> Option<String> {
    events
        .iter()
        .filter(|event| event.kind == ETHEREUM_TX_EVENT)
        .filter_map(|event| event.attribute(ETHEREUM_TX_HASH_ATTRIBUTE))
        .find_map(|value| TxHash::parse(value).ok())
        .map(|hash| hash.to_lower_prefixed())
}
