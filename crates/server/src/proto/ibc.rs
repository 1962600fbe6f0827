// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! IBC core (client, connection, channel) and ICS-20 transfer messages.

use super::Coin;
use serde::Serialize;

/// `ibc.core.client.v1.Height`
#[derive(Clone, Copy, Eq, PartialEq, Serialize, ::prost::Message)]
#[serde(rename_all = "camelCase")]
pub struct Height {
    #[prost(uint64, tag = "1")]
    pub revision_number: u64,
    #[prost(uint64, tag = "2")]
    pub revision_height: u64,
}

pub mod client {
    use prost_types::Any;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgCreateClient {
        #[prost(message, optional, tag = "1")]
        pub client_state: Option<Any>,
        #[prost(message, optional, tag = "2")]
        pub consensus_state: Option<Any>,
        #[prost(string, tag = "3")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateClient {
        #[prost(string, tag = "1")]
        pub client_id: String,
        #[prost(message, optional, tag = "2")]
        pub client_message: Option<Any>,
        #[prost(string, tag = "3")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpgradeClient {
        #[prost(string, tag = "1")]
        pub client_id: String,
        #[prost(message, optional, tag = "2")]
        pub client_state: Option<Any>,
        #[prost(message, optional, tag = "3")]
        pub consensus_state: Option<Any>,
        #[prost(bytes = "vec", tag = "4")]
        pub proof_upgrade_client: Vec<u8>,
        #[prost(bytes = "vec", tag = "5")]
        pub proof_upgrade_consensus_state: Vec<u8>,
        #[prost(string, tag = "6")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSubmitMisbehaviour {
        #[prost(string, tag = "1")]
        pub client_id: String,
        #[prost(message, optional, tag = "2")]
        pub misbehaviour: Option<Any>,
        #[prost(string, tag = "3")]
        pub signer: String,
    }

    impl_type_url! {
        MsgCreateClient => "/ibc.core.client.v1.MsgCreateClient",
        MsgUpdateClient => "/ibc.core.client.v1.MsgUpdateClient",
        MsgUpgradeClient => "/ibc.core.client.v1.MsgUpgradeClient",
        MsgSubmitMisbehaviour => "/ibc.core.client.v1.MsgSubmitMisbehaviour",
    }
}

pub mod connection {
    use super::Height;
    use prost_types::Any;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MerklePrefix {
        #[prost(bytes = "vec", tag = "1")]
        pub key_prefix: Vec<u8>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Counterparty {
        #[prost(string, tag = "1")]
        pub client_id: String,
        #[prost(string, tag = "2")]
        pub connection_id: String,
        #[prost(message, optional, tag = "3")]
        pub prefix: Option<MerklePrefix>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Version {
        #[prost(string, tag = "1")]
        pub identifier: String,
        #[prost(string, repeated, tag = "2")]
        pub features: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgConnectionOpenInit {
        #[prost(string, tag = "1")]
        pub client_id: String,
        #[prost(message, optional, tag = "2")]
        pub counterparty: Option<Counterparty>,
        #[prost(message, optional, tag = "3")]
        pub version: Option<Version>,
        #[prost(uint64, tag = "4")]
        pub delay_period: u64,
        #[prost(string, tag = "5")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgConnectionOpenTry {
        #[prost(string, tag = "1")]
        pub client_id: String,
        #[prost(string, tag = "2")]
        pub previous_connection_id: String,
        #[prost(message, optional, tag = "3")]
        pub client_state: Option<Any>,
        #[prost(message, optional, tag = "4")]
        pub counterparty: Option<Counterparty>,
        #[prost(uint64, tag = "5")]
        pub delay_period: u64,
        #[prost(message, repeated, tag = "6")]
        pub counterparty_versions: Vec<Version>,
        #[prost(message, optional, tag = "7")]
        pub proof_height: Option<Height>,
        #[prost(bytes = "vec", tag = "8")]
        pub proof_init: Vec<u8>,
        #[prost(bytes = "vec", tag = "9")]
        pub proof_client: Vec<u8>,
        #[prost(bytes = "vec", tag = "10")]
        pub proof_consensus: Vec<u8>,
        #[prost(message, optional, tag = "11")]
        pub consensus_height: Option<Height>,
        #[prost(string, tag = "12")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgConnectionOpenAck {
        #[prost(string, tag = "1")]
        pub connection_id: String,
        #[prost(string, tag = "2")]
        pub counterparty_connection_id: String,
        #[prost(message, optional, tag = "3")]
        pub version: Option<Version>,
        #[prost(message, optional, tag = "4")]
        pub client_state: Option<Any>,
        #[prost(message, optional, tag = "5")]
        pub proof_height: Option<Height>,
        #[prost(bytes = "vec", tag = "6")]
        pub proof_try: Vec<u8>,
        #[prost(bytes = "vec", tag = "7")]
        pub proof_client: Vec<u8>,
        #[prost(bytes = "vec", tag = "8")]
        pub proof_consensus: Vec<u8>,
        #[prost(message, optional, tag = "9")]
        pub consensus_height: Option<Height>,
        #[prost(string, tag = "10")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgConnectionOpenConfirm {
        #[prost(string, tag = "1")]
        pub connection_id: String,
        #[prost(bytes = "vec", tag = "2")]
        pub proof_ack: Vec<u8>,
        #[prost(message, optional, tag = "3")]
        pub proof_height: Option<Height>,
        #[prost(string, tag = "4")]
        pub signer: String,
    }

    impl_type_url! {
        MsgConnectionOpenInit => "/ibc.core.connection.v1.MsgConnectionOpenInit",
        MsgConnectionOpenTry => "/ibc.core.connection.v1.MsgConnectionOpenTry",
        MsgConnectionOpenAck => "/ibc.core.connection.v1.MsgConnectionOpenAck",
        MsgConnectionOpenConfirm => "/ibc.core.connection.v1.MsgConnectionOpenConfirm",
    }
}

pub mod channel {
    use super::Height;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Counterparty {
        #[prost(string, tag = "1")]
        pub port_id: String,
        #[prost(string, tag = "2")]
        pub channel_id: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Channel {
        #[prost(int32, tag = "1")]
        pub state: i32,
        #[prost(int32, tag = "2")]
        pub ordering: i32,
        #[prost(message, optional, tag = "3")]
        pub counterparty: Option<Counterparty>,
        #[prost(string, repeated, tag = "4")]
        pub connection_hops: Vec<String>,
        #[prost(string, tag = "5")]
        pub version: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Packet {
        #[prost(uint64, tag = "1")]
        pub sequence: u64,
        #[prost(string, tag = "2")]
        pub source_port: String,
        #[prost(string, tag = "3")]
        pub source_channel: String,
        #[prost(string, tag = "4")]
        pub destination_port: String,
        #[prost(string, tag = "5")]
        pub destination_channel: String,
        #[prost(bytes = "vec", tag = "6")]
        pub data: Vec<u8>,
        #[prost(message, optional, tag = "7")]
        pub timeout_height: Option<Height>,
        #[prost(uint64, tag = "8")]
        pub timeout_timestamp: u64,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgChannelOpenInit {
        #[prost(string, tag = "1")]
        pub port_id: String,
        #[prost(message, optional, tag = "2")]
        pub channel: Option<Channel>,
        #[prost(string, tag = "3")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgChannelOpenTry {
        #[prost(string, tag = "1")]
        pub port_id: String,
        #[prost(string, tag = "2")]
        pub previous_channel_id: String,
        #[prost(message, optional, tag = "3")]
        pub channel: Option<Channel>,
        #[prost(string, tag = "4")]
        pub counterparty_version: String,
        #[prost(bytes = "vec", tag = "5")]
        pub proof_init: Vec<u8>,
        #[prost(message, optional, tag = "6")]
        pub proof_height: Option<Height>,
        #[prost(string, tag = "7")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgChannelOpenAck {
        #[prost(string, tag = "1")]
        pub port_id: String,
        #[prost(string, tag = "2")]
        pub channel_id: String,
        #[prost(string, tag = "3")]
        pub counterparty_channel_id: String,
        #[prost(string, tag = "4")]
        pub counterparty_version: String,
        #[prost(bytes = "vec", tag = "5")]
        pub proof_try: Vec<u8>,
        #[prost(message, optional, tag = "6")]
        pub proof_height: Option<Height>,
        #[prost(string, tag = "7")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgChannelOpenConfirm {
        #[prost(string, tag = "1")]
        pub port_id: String,
        #[prost(string, tag = "2")]
        pub channel_id: String,
        #[prost(bytes = "vec", tag = "3")]
        pub proof_ack: Vec<u8>,
        #[prost(message, optional, tag = "4")]
        pub proof_height: Option<Height>,
        #[prost(string, tag = "5")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgRecvPacket {
        #[prost(message, optional, tag = "1")]
        pub packet: Option<Packet>,
        #[prost(bytes = "vec", tag = "2")]
        pub proof_commitment: Vec<u8>,
        #[prost(message, optional, tag = "3")]
        pub proof_height: Option<Height>,
        #[prost(string, tag = "4")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgTimeout {
        #[prost(message, optional, tag = "1")]
        pub packet: Option<Packet>,
        #[prost(bytes = "vec", tag = "2")]
        pub proof_unreceived: Vec<u8>,
        #[prost(message, optional, tag = "3")]
        pub proof_height: Option<Height>,
        #[prost(uint64, tag = "4")]
        pub next_sequence_recv: u64,
        #[prost(string, tag = "5")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgTimeoutOnClose {
        #[prost(message, optional, tag = "1")]
        pub packet: Option<Packet>,
        #[prost(bytes = "vec", tag = "2")]
        pub proof_unreceived: Vec<u8>,
        #[prost(bytes = "vec", tag = "3")]
        pub proof_close: Vec<u8>,
        #[prost(message, optional, tag = "4")]
        pub proof_height: Option<Height>,
        #[prost(uint64, tag = "5")]
        pub next_sequence_recv: u64,
        #[prost(string, tag = "6")]
        pub signer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgAcknowledgement {
        #[prost(message, optional, tag = "1")]
        pub packet: Option<Packet>,
        #[prost(bytes = "vec", tag = "2")]
        pub acknowledgement: Vec<u8>,
        #[prost(bytes = "vec", tag = "3")]
        pub proof_acked: Vec<u8>,
        #[prost(message, optional, tag = "4")]
        pub proof_height: Option<Height>,
        #[prost(string, tag = "5")]
        pub signer: String,
    }

    impl_type_url! {
        MsgChannelOpenInit => "/ibc.core.channel.v1.MsgChannelOpenInit",
        MsgChannelOpenTry => "/ibc.core.channel.v1.MsgChannelOpenTry",
        MsgChannelOpenAck => "/ibc.core.channel.v1.MsgChannelOpenAck",
        MsgChannelOpenConfirm => "/ibc.core.channel.v1.MsgChannelOpenConfirm",
        MsgRecvPacket => "/ibc.core.channel.v1.MsgRecvPacket",
        MsgTimeout => "/ibc.core.channel.v1.MsgTimeout",
        MsgTimeoutOnClose => "/ibc.core.channel.v1.MsgTimeoutOnClose",
        MsgAcknowledgement => "/ibc.core.channel.v1.MsgAcknowledgement",
    }
}

/// `ibc.applications.transfer.v1.MsgTransfer`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgTransfer {
    #[prost(string, tag = "1")]
    pub source_port: String,
    #[prost(string, tag = "2")]
    pub source_channel: String,
    #[prost(message, optional, tag = "3")]
    pub token: Option<Coin>,
    #[prost(string, tag = "4")]
    pub sender: String,
    #[prost(string, tag = "5")]
    pub receiver: String,
    #[prost(message, optional, tag = "6")]
    pub timeout_height: Option<Height>,
    #[prost(uint64, tag = "7")]
    pub timeout_timestamp: u64,
    #[prost(string, tag = "8")]
    pub memo: String,
}

/// ICS-20 packet payload, carried as JSON inside `Packet::data`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct FungibleTokenPacketData {
    pub denom: String,
    pub amount: String,
    pub sender: String,
    pub receiver: String,
    #[serde(default)]
    pub memo: String,
}

impl_type_url! {
    MsgTransfer => "/ibc.applications.transfer.v1.MsgTransfer",
}
