// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::generic;
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::distribution::{
    MsgFundCommunityPool, MsgSetWithdrawAddress, MsgWithdrawDelegatorReward,
    MsgWithdrawValidatorCommission,
};
use crate::utils::coins_to_map;
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
impl KnownMessage for MsgSetWithdrawAddress {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.delegator_address)
            .write_text(" sets withdraw address to ")
            .write_address(&self.withdraw_address);

        let content = json!({
            "delegatorAddress": self.delegator_address,
            "withdrawAddress": self.withdraw_address,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.delegator_address, &self.withdraw_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgWithdrawDelegatorReward {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.delegator_address)
            .write_text(" withdraws rewards from ")
            .write_address(&self.validator_address);

        let content = json!({
            "delegatorAddress": self.delegator_address,
            "validatorAddress": self.validator_address,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.delegator_address, &self.validator_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgWithdrawValidatorCommission {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.validator_address)
            .write_text(" withdraws commission");

        let content = json!({ "validatorAddress": self.validator_address });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.validator_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgFundCommunityPool {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let metadata = ctx.denoms_metadata(&self.amount).await;

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.depositor)
            .write_text(" funds community pool with ")
            .write_coins(&self.amount, &metadata);

        let content = json!({
            "depositor": self.depositor,
            "amount": coins_to_map(&self.amount),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.depositor]))
    }
}
