// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! IBC client, connection, channel and ICS-20 transfer messages.

use super::{coin_list, generic};
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::ibc::channel::{
    Counterparty as ChannelCounterparty, MsgAcknowledgement, MsgChannelOpenAck,
    MsgChannelOpenConfirm, MsgChannelOpenInit, MsgChannelOpenTry, MsgRecvPacket, MsgTimeout,
    MsgTimeoutOnClose, Packet,
};
use crate::proto::ibc::client::{
    MsgCreateClient, MsgSubmitMisbehaviour, MsgUpdateClient, MsgUpgradeClient,
};
use crate::proto::ibc::connection::{
    MsgConnectionOpenAck, MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTry,
};
use crate::proto::ibc::{FungibleTokenPacketData, Height, MsgTransfer};
use crate::proto::Coin;
use crate::utils::coins_to_map;
use async_trait::async_trait;
use primitive_types::U256;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use thiserror::Error;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum IncomingCoinError {
    #[error("invalid packet amount {0:?}")]
    InvalidAmount(String),

    #[error("empty packet denom")]
    EmptyDenom,
}

/// The coin a packet credits on the receiving chain.
///
/// A denom prefixed by the source port and channel is returning home and loses
/// that prefix; any other denom gains the destination port and channel. A denom
/// still carrying a trace is replaced by its `ibc/<hash>` voucher name.
pub(crate) fn incoming_ibc_coin(
    packet: &Packet,
    denom: &str,
    amount: &str,
) -> Result<Coin, IncomingCoinError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IncomingCoinError::InvalidAmount(amount.to_string()));
    }
    let amount = U256::from_dec_str(amount)
        .map_err(|_| IncomingCoinError::InvalidAmount(amount.to_string()))?;
    if denom.is_empty() {
        return Err(IncomingCoinError::EmptyDenom);
    }

    let source_prefix = format!("{}/{}/", packet.source_port, packet.source_channel);
    let trace = match denom.strip_prefix(&source_prefix) {
        Some(base) => base.to_string(),
        None => format!(
            "{}/{}/{}",
            packet.destination_port, packet.destination_channel, denom
        ),
    };

    let denom = if trace.contains('/') {
        format!("ibc/{}", hex::encode_upper(Sha256::digest(trace.as_bytes())))
    } else {
        trace
    };
    Ok(Coin::new(amount.to_string(), denom))
}

fn packet_data(packet: &Packet) -> Option<FungibleTokenPacketData> {
    serde_json::from_slice(&packet.data).ok()
}

fn height(height: Option<Height>) -> Value {
    json!(height.unwrap_or_default())
}

fn packet_fields(signer: &str, proof_height: Option<Height>, packet: &Packet) -> Value {
    json!({
        "signer": signer,
        "proofHeight": height(proof_height),
        "sourcePort": packet.source_port,
        "sourceChannel": packet.source_channel,
        "destinationPort": packet.destination_port,
        "destinationChannel": packet.destination_channel,
        "sequence": packet.sequence,
        "timeoutHeight": height(packet.timeout_height),
    })
}

/// Describes a packet-bearing message, including the ICS-20 transfer the packet carries.
async fn describe_packet(
    ctx: &DecodeContext<'_>,
    signer: &str,
    action: &str,
    packet: &Packet,
    content: Value,
) -> ParsedContent {
    let mut text = FriendlyTextBuilder::new();
    text.write_address(signer);

    let Some(data) = packet_data(packet) else {
        text.write_text(action.trim_end_matches(':'));
        return ParsedContent::new(content, text);
    };
    text.write_text(action);

    let mut transfer = None;
    text.write_text(" ").write_text(data.sender.as_str());
    match incoming_ibc_coin(packet, &data.denom, &data.amount) {
        Ok(coin) => {
            let tokens = [coin];
            let metadata = ctx.denoms_metadata(&tokens).await;
            text.write_text(" transfers ")
                .write_coins(&tokens, &metadata)
                .write_text(" to ")
                .write_address(&data.receiver);
            transfer = Some(json!({
                "from": [data.sender],
                "to": [{
                    "address": data.receiver,
                    "amount": coins_to_map(&tokens),
                }],
            }));
        }
        Err(e) => {
            tracing::warn!(tx_hash = ctx.tx_hash, error = %e, "Failed to get incoming IBC coin");
            text.write_text(" transfers unknown amount (parse error)")
                .write_text(" to ")
                .write_address(&data.receiver);
        }
    }

    text.write_text(format!(
        " through IBC via {}/{} from {}/{}",
        packet.source_port,
        packet.source_channel,
        packet.destination_port,
        packet.destination_channel
    ));
    if !data.memo.is_empty() {
        text.write_text(" with memo ").write_text(data.memo.as_str());
    }

    let mut parsed = ParsedContent::new(content, text);
    if let Some(transfer) = transfer {
        parsed.insert("transfer", transfer);
    }
    if !data.memo.is_empty() {
        parsed.insert("memo", json!(data.memo));
    }
    parsed
}

fn packet_involvers(signer: &str, packet: Option<&Packet>) -> InvolversSet {
    let mut involvers = generic([signer]);
    if let Some(data) = packet.and_then(packet_data) {
        involvers.merge(generic([data.sender, data.receiver]));
    }
    involvers
}

#[async_trait]
impl KnownMessage for MsgCreateClient {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(" creates IBC client");
        Ok(ParsedContent::new(json!({ "signer": self.signer }), text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

fn client_action(signer: &str, client_id: &str, action: &str) -> ParsedContent {
    let mut text = FriendlyTextBuilder::new();
    text.write_address(signer)
        .write_text(action)
        .write_text(client_id);
    ParsedContent::new(json!({ "signer": signer, "clientId": client_id }), text)
}

#[async_trait]
impl KnownMessage for MsgUpdateClient {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        Ok(client_action(&self.signer, &self.client_id, " updates IBC client "))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgUpgradeClient {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        Ok(client_action(&self.signer, &self.client_id, " upgrades IBC client "))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgSubmitMisbehaviour {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        Ok(client_action(
            &self.signer,
            &self.client_id,
            " submits IBC misbehaviour for client ",
        ))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgTransfer {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let token = coin_list(&self.token);
        let metadata = ctx.denoms_metadata(&token).await;

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.sender)
            .write_text(" transfers ")
            .write_coins(&token, &metadata)
            .write_text(" to ")
            .write_address(&self.receiver)
            .write_text(format!(
                " through IBC via {}/{}",
                self.source_port, self.source_channel
            ));

        let mut parsed = ParsedContent::new(
            json!({
                "sender": self.sender,
                "receiver": self.receiver,
                "amount": coins_to_map(&token),
                "timeoutHeight": height(self.timeout_height),
                "timeoutEpochUTC": self.timeout_timestamp / NANOS_PER_SECOND,
                "sourcePort": self.source_port,
                "sourceChannel": self.source_channel,
            }),
            text,
        );
        if !self.memo.is_empty() {
            parsed.insert("memo", json!(self.memo));
        }
        Ok(parsed)
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.sender, &self.receiver]))
    }
}

#[async_trait]
impl KnownMessage for MsgConnectionOpenInit {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let counterparty = self.counterparty.clone().unwrap_or_default();

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(format!(
            " initializes open connection {} with counterparty client {} and connection {}",
            self.client_id, counterparty.client_id, counterparty.connection_id
        ));

        let content = json!({
            "signer": self.signer,
            "clientId": self.client_id,
            "counterpartyClientId": counterparty.client_id,
            "counterpartyConnectionId": counterparty.connection_id,
            "delayPeriod": self.delay_period,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgConnectionOpenTry {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let counterparty = self.counterparty.clone().unwrap_or_default();

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(format!(
            " tries open connection {} with counterparty client {} and connection {}",
            self.client_id, counterparty.client_id, counterparty.connection_id
        ));

        let content = json!({
            "signer": self.signer,
            "clientId": self.client_id,
            "counterpartyClientId": counterparty.client_id,
            "counterpartyConnectionId": counterparty.connection_id,
            "proofHeight": height(self.proof_height),
            "consensusHeight": height(self.consensus_height),
            "delayPeriod": self.delay_period,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgConnectionOpenAck {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(format!(
            " acknowledges open connection {} with counterparty connection {}",
            self.connection_id, self.counterparty_connection_id
        ));

        let content = json!({
            "signer": self.signer,
            "connectionId": self.connection_id,
            "counterpartyConnectionId": self.counterparty_connection_id,
            "proofHeight": height(self.proof_height),
            "consensusHeight": height(self.consensus_height),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgConnectionOpenConfirm {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer)
            .write_text(" confirms open connection ")
            .write_text(self.connection_id.as_str());

        let content = json!({
            "signer": self.signer,
            "connectionId": self.connection_id,
            "proofHeight": height(self.proof_height),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

fn channel_counterparty(
    channel: Option<&crate::proto::ibc::channel::Channel>,
) -> (ChannelCounterparty, Vec<String>) {
    match channel {
        Some(channel) => (
            channel.counterparty.clone().unwrap_or_default(),
            channel.connection_hops.clone(),
        ),
        None => Default::default(),
    }
}

#[async_trait]
impl KnownMessage for MsgChannelOpenInit {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let (counterparty, hops) = channel_counterparty(self.channel.as_ref());

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(format!(
            " initializes open channel for port {} connects to counterparty port {} and channel {}",
            self.port_id, counterparty.port_id, counterparty.channel_id
        ));

        let content = json!({
            "signer": self.signer,
            "portId": self.port_id,
            "counterPartyPortId": counterparty.port_id,
            "counterPartyChannelId": counterparty.channel_id,
            "connectionHops": hops,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgChannelOpenTry {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let (counterparty, hops) = channel_counterparty(self.channel.as_ref());

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(format!(
            " tries open channel for port {} connects to counterparty port {} and channel {}",
            self.port_id, counterparty.port_id, counterparty.channel_id
        ));

        let content = json!({
            "signer": self.signer,
            "portId": self.port_id,
            "counterPartyPortId": counterparty.port_id,
            "counterPartyChannelId": counterparty.channel_id,
            "connectionHops": hops,
            "proofHeight": height(self.proof_height),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgChannelOpenAck {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(format!(
            " acknowledges open channel for port {} and channel {} with counterparty channel {}",
            self.port_id, self.channel_id, self.counterparty_channel_id
        ));

        let content = json!({
            "signer": self.signer,
            "portId": self.port_id,
            "channelId": self.channel_id,
            "counterPartyChannel": self.counterparty_channel_id,
            "proofHeight": height(self.proof_height),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgChannelOpenConfirm {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.signer).write_text(format!(
            " confirms open channel for port {} and channel {}",
            self.port_id, self.channel_id
        ));

        let content = json!({
            "signer": self.signer,
            "portId": self.port_id,
            "channelId": self.channel_id,
            "proofHeight": height(self.proof_height),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.signer]))
    }
}

#[async_trait]
impl KnownMessage for MsgAcknowledgement {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let packet = self.packet.clone().unwrap_or_default();
        let mut content = packet_fields(&self.signer, self.proof_height, &packet);
        content["timeoutTimestamp"] = json!(packet.timeout_timestamp);
        Ok(describe_packet(ctx, &self.signer, " acknowledges packet:", &packet, content).await)
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(packet_involvers(&self.signer, self.packet.as_ref()))
    }
}

#[async_trait]
impl KnownMessage for MsgRecvPacket {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let packet = self.packet.clone().unwrap_or_default();
        let mut content = packet_fields(&self.signer, self.proof_height, &packet);
        content["timeoutEpochUTC"] = json!(packet.timeout_timestamp / NANOS_PER_SECOND);
        Ok(describe_packet(ctx, &self.signer, " informs receive packet:", &packet, content).await)
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(packet_involvers(&self.signer, self.packet.as_ref()))
    }
}

#[async_trait]
impl KnownMessage for MsgTimeout {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let packet = self.packet.clone().unwrap_or_default();
        let mut content = packet_fields(&self.signer, self.proof_height, &packet);
        content["timeoutEpochUTC"] = json!(packet.timeout_timestamp / NANOS_PER_SECOND);
        content["nextSequenceRecv"] = json!(self.next_sequence_recv);
        Ok(describe_packet(ctx, &self.signer, " informs packet timed out:", &packet, content).await)
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(packet_involvers(&self.signer, self.packet.as_ref()))
    }
}

#[async_trait]
impl KnownMessage for MsgTimeoutOnClose {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let packet = self.packet.clone().unwrap_or_default();
        let mut content = packet_fields(&self.signer, self.proof_height, &packet);
        content["timeoutEpochUTC"] = json!(packet.timeout_timestamp / NANOS_PER_SECOND);
        content["nextSequenceRecv"] = json!(self.next_sequence_recv);
        Ok(describe_packet(
            ctx,
            &self.signer,
            " informs closing timed out packet:",
            &packet,
            content,
        )
        .await)
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(packet_involvers(&self.signer, self.packet.as_ref()))
    }
}
