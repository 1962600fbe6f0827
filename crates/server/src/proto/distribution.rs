// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Coin, DecCoin};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSetWithdrawAddress {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub withdraw_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgWithdrawDelegatorReward {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgWithdrawValidatorCommission {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgFundCommunityPool {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(string, tag = "2")]
    pub depositor: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DelegationDelegatorReward {
    #[prost(string, tag = "1")]
    pub validator_address: String,
    #[prost(message, repeated, tag = "2")]
    pub reward: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegationTotalRewardsRequest {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegationTotalRewardsResponse {
    #[prost(message, repeated, tag = "1")]
    pub rewards: Vec<DelegationDelegatorReward>,
    #[prost(message, repeated, tag = "2")]
    pub total: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidatorAccumulatedCommission {
    #[prost(message, repeated, tag = "1")]
    pub commission: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorCommissionRequest {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorCommissionResponse {
    #[prost(message, optional, tag = "1")]
    pub commission: Option<ValidatorAccumulatedCommission>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidatorOutstandingRewards {
    #[prost(message, repeated, tag = "1")]
    pub rewards: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorOutstandingRewardsRequest {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorOutstandingRewardsResponse {
    #[prost(message, optional, tag = "1")]
    pub rewards: Option<ValidatorOutstandingRewards>,
}

impl_type_url! {
    MsgSetWithdrawAddress => "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
    MsgWithdrawDelegatorReward => "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
    MsgWithdrawValidatorCommission => "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
    MsgFundCommunityPool => "/cosmos.distribution.v1beta1.MsgFundCommunityPool",
}
