// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use prost_types::Any;

/// Type URL of the extension option that marks a Cosmos tx as an EVM envelope.
pub const EXTENSION_OPTIONS_ETHEREUM_TX: &str = "/ethermint.evm.v1.ExtensionOptionsEthereumTx";

/// `ethermint.evm.v1.MsgEthereumTx`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgEthereumTx {
    #[prost(message, optional, tag = "1")]
    pub data: Option<Any>,
    #[prost(double, tag = "2")]
    pub size: f64,
    /// Hex encoded EVM transaction hash.
    #[prost(string, tag = "3")]
    pub hash: String,
    /// Hex encoded sender address.
    #[prost(string, tag = "4")]
    pub from: String,
}

impl_type_url! {
    MsgEthereumTx => "/ethermint.evm.v1.MsgEthereumTx",
}
