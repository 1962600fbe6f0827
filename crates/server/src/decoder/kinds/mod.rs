// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Message kinds the explorer describes natively, one module per Cosmos module.

mod authz;
mod bank;
mod crisis;
mod distribution;
mod ethermint;
mod evidence;
mod gov;
mod ibc;
mod slashing;
mod staking;

use super::involvers::{InvolverRole, InvolversSet};
use super::registry::MessageRegistryBuilder;
use crate::proto::{self, Coin};

/// Involvers set holding `addresses` under the generic role.
pub(crate) fn generic<I, S>(addresses: I) -> InvolversSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut involvers = InvolversSet::new();
    involvers.add(InvolverRole::Generic, addresses);
    involvers
}

/// A single optional coin as a coin list.
pub(crate) fn coin_list(coin: &Option<Coin>) -> Vec<Coin> {
    coin.iter().cloned().collect()
}

/// Registers every message kind handled by the default parser and extractor.
pub(crate) fn register_builtin(builder: &mut MessageRegistryBuilder) {
    use proto::ibc::{channel, client, connection};

    builder
        .kind::<proto::bank::MsgSend>()
        .kind::<proto::bank::MsgMultiSend>()
        .kind::<proto::crisis::MsgVerifyInvariant>()
        .kind::<proto::distribution::MsgSetWithdrawAddress>()
        .kind::<proto::distribution::MsgWithdrawDelegatorReward>()
        .kind::<proto::distribution::MsgWithdrawValidatorCommission>()
        .kind::<proto::distribution::MsgFundCommunityPool>()
        .kind::<proto::evidence::MsgSubmitEvidence>()
        .kind::<proto::gov::v1::MsgSubmitProposal>()
        .kind::<proto::gov::v1::MsgDeposit>()
        .kind::<proto::gov::v1::MsgVote>()
        .kind::<proto::gov::v1::MsgVoteWeighted>()
        .kind::<proto::gov::v1beta1::MsgSubmitProposal>()
        .kind::<proto::gov::v1beta1::MsgDeposit>()
        .kind::<proto::gov::v1beta1::MsgVote>()
        .kind::<proto::gov::v1beta1::MsgVoteWeighted>()
        .kind::<client::MsgCreateClient>()
        .kind::<client::MsgUpdateClient>()
        .kind::<client::MsgUpgradeClient>()
        .kind::<client::MsgSubmitMisbehaviour>()
        .kind::<proto::ibc::MsgTransfer>()
        .kind::<connection::MsgConnectionOpenInit>()
        .kind::<connection::MsgConnectionOpenTry>()
        .kind::<connection::MsgConnectionOpenAck>()
        .kind::<connection::MsgConnectionOpenConfirm>()
        .kind::<channel::MsgChannelOpenInit>()
        .kind::<channel::MsgChannelOpenTry>()
        .kind::<channel::MsgChannelOpenAck>()
        .kind::<channel::MsgChannelOpenConfirm>()
        .kind::<channel::MsgRecvPacket>()
        .kind::<channel::MsgAcknowledgement>()
        .kind::<channel::MsgTimeout>()
        .kind::<channel::MsgTimeoutOnClose>()
        .kind::<proto::slashing::MsgUnjail>()
        .kind::<proto::staking::MsgCreateValidator>()
        .kind::<proto::staking::MsgEditValidator>()
        .kind::<proto::staking::MsgDelegate>()
        .kind::<proto::staking::MsgBeginRedelegate>()
        .kind::<proto::staking::MsgUndelegate>()
        .kind::<proto::staking::MsgCancelUnbondingDelegation>()
        .kind::<proto::authz::MsgGrant>()
        .kind::<proto::authz::MsgExec>()
        .kind::<proto::authz::MsgRevoke>();
}

/// Handlers for chain-specific messages, consulted ahead of the defaults.
pub(crate) fn register_chain_specific(builder: &mut MessageRegistryBuilder) {
    builder.specific::<proto::ethermint::MsgEthereumTx>();
}
