// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{coin_list, generic};
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::staking::{
    Description, MsgBeginRedelegate, MsgCancelUnbondingDelegation, MsgCreateValidator,
    MsgDelegate, MsgEditValidator, MsgUndelegate,
};
use crate::utils::{coins_to_map, format_legacy_dec};
use async_trait::async_trait;
use serde_json::{Map, Value, json};

/// Non-empty description fields only.
fn description_content(description: Option<&Description>) -> Value {
    let mut fields = Map::new();
    if let Some(description) = description {
        for (key, value) in [
            ("moniker", &description.moniker),
            ("identity", &description.identity),
            ("website", &description.website),
            ("securityContact", &description.security_contact),
            ("details", &description.details),
        ] {
            if !value.is_empty() {
                fields.insert(key.to_string(), Value::String(value.clone()));
            }
        }
    }
    Value::Object(fields)
}

#[async_trait]
impl KnownMessage for MsgCreateValidator {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let value = coin_list(&self.value);
        let metadata = ctx.denoms_metadata(&value).await;

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.delegator_address)
            .write_text(" creates validator ")
            .write_address(&self.validator_address)
            .write_text(" with delegation ")
            .write_coins(&value, &metadata);

        let commission = self.commission.clone().unwrap_or_default();
        let content = json!({
            "validator": self.validator_address,
            "delegator": self.delegator_address,
            "delegate": coins_to_map(&value),
            "commission": {
                "rate": format_legacy_dec(&commission.rate),
                "maxRate": format_legacy_dec(&commission.max_rate),
                "maxChangeRate": format_legacy_dec(&commission.max_change_rate),
            },
            "minSelfDelegation": self.min_self_delegation,
            "description": description_content(self.description.as_ref()),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.delegator_address, &self.validator_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgEditValidator {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.validator_address)
            .write_text(" updates validator information");

        let mut parsed = ParsedContent::new(
            json!({
                "validator": self.validator_address,
                "description": description_content(self.description.as_ref()),
            }),
            text,
        );
        if !self.commission_rate.is_empty() {
            parsed.insert(
                "commission",
                json!({ "rate": format_legacy_dec(&self.commission_rate) }),
            );
        }
        if !self.min_self_delegation.is_empty() {
            parsed.insert("minSelfDelegation", json!(self.min_self_delegation));
        }
        Ok(parsed)
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.validator_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgDelegate {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let amount = coin_list(&self.amount);
        let metadata = ctx.denoms_metadata(&amount).await;

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.delegator_address)
            .write_text(" delegates ")
            .write_coins(&amount, &metadata)
            .write_text(" to ")
            .write_address(&self.validator_address);

        let content = json!({
            "delegator": self.delegator_address,
            "validator": self.validator_address,
            "amount": coins_to_map(&amount),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.delegator_address, &self.validator_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgBeginRedelegate {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let amount = coin_list(&self.amount);
        let metadata = ctx.denoms_metadata(&amount).await;

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.delegator_address)
            .write_text(" re-delegates ")
            .write_coins(&amount, &metadata)
            .write_text(" from ")
            .write_address(&self.validator_src_address)
            .write_text(" to ")
            .write_address(&self.validator_dst_address);

        let content = json!({
            "delegator": self.delegator_address,
            "validatorFrom": self.validator_src_address,
            "validatorTo": self.validator_dst_address,
            "amount": coins_to_map(&amount),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([
            &self.delegator_address,
            &self.validator_src_address,
            &self.validator_dst_address,
        ]))
    }
}

#[async_trait]
impl KnownMessage for MsgUndelegate {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let amount = coin_list(&self.amount);
        let metadata = ctx.denoms_metadata(&amount).await;

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.delegator_address)
            .write_text(" un-delegates ")
            .write_coins(&amount, &metadata)
            .write_text(" from ")
            .write_address(&self.validator_address);

        let content = json!({
            "delegator": self.delegator_address,
            "validator": self.validator_address,
            "amount": coins_to_map(&amount),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.delegator_address, &self.validator_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgCancelUnbondingDelegation {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.delegator_address)
            .write_text(" cancels unbonding delegation from ")
            .write_address(&self.validator_address);

        let content = json!({
            "delegator": self.delegator_address,
            "validator": self.validator_address,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.delegator_address, &self.validator_address]))
    }
}
