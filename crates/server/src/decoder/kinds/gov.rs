// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Governance messages of both the `v1` and the legacy `v1beta1` API.

use super::generic;
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::gov::{VoteOption, v1, v1beta1};
use crate::proto::Coin;
use crate::utils::coins_to_map;
use async_trait::async_trait;
use serde_json::json;

fn write_vote(text: &mut FriendlyTextBuilder, option: i32) {
    let phrase = match VoteOption::try_from(option) {
        Ok(VoteOption::Yes) => " votes YES",
        Ok(VoteOption::No) => " votes NO",
        Ok(VoteOption::Abstain) => " votes Abstains",
        Ok(VoteOption::NoWithVeto) => " votes NO with VETO",
        _ => {
            text.write_text(" votes ").write_text(VoteOption::name_of(option));
            return;
        }
    };
    text.write_text(phrase);
}

async fn describe_proposal(
    ctx: &DecodeContext<'_>,
    proposer: &str,
    message_types: &[&str],
    deposit: &[Coin],
) -> FriendlyTextBuilder {
    let metadata = ctx.denoms_metadata(deposit).await;

    let mut text = FriendlyTextBuilder::new();
    text.write_address(proposer)
        .write_text(" submits proposal of message types [")
        .write_text(message_types.join(", "))
        .write_text("] with initial deposit ")
        .write_coins(deposit, &metadata);
    text
}

async fn describe_deposit(
    ctx: &DecodeContext<'_>,
    depositor: &str,
    amount: &[Coin],
    proposal_id: u64,
) -> FriendlyTextBuilder {
    let metadata = ctx.denoms_metadata(amount).await;

    let mut text = FriendlyTextBuilder::new();
    text.write_address(depositor)
        .write_text(" deposits ")
        .write_coins(amount, &metadata)
        .write_text(" to proposal ")
        .write_text(proposal_id.to_string());
    text
}

fn describe_vote(voter: &str, option: i32, proposal_id: u64) -> FriendlyTextBuilder {
    let mut text = FriendlyTextBuilder::new();
    text.write_address(voter);
    write_vote(&mut text, option);
    text.write_text(" to proposal ")
        .write_text(proposal_id.to_string());
    text
}

fn describe_weighted_vote(voter: &str, proposal_id: u64) -> FriendlyTextBuilder {
    let mut text = FriendlyTextBuilder::new();
    text.write_address(voter)
        .write_text(" votes with weight to proposal ")
        .write_text(proposal_id.to_string());
    text
}

#[async_trait]
impl KnownMessage for v1::MsgSubmitProposal {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let message_types: Vec<&str> = self
            .messages
            .iter()
            .map(|msg| msg.type_url.as_str())
            .collect();
        let text =
            describe_proposal(ctx, &self.proposer, &message_types, &self.initial_deposit).await;

        let content = json!({
            "proposer": self.proposer,
            "metadata": self.metadata,
            "deposit": coins_to_map(&self.initial_deposit),
            "messageTypes": message_types,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.proposer]))
    }
}

#[async_trait]
impl KnownMessage for v1beta1::MsgSubmitProposal {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let content_type = self
            .content
            .as_ref()
            .map(|content| content.type_url.as_str())
            .unwrap_or_default();
        let text =
            describe_proposal(ctx, &self.proposer, &[content_type], &self.initial_deposit).await;

        let content = json!({
            "proposer": self.proposer,
            "deposit": coins_to_map(&self.initial_deposit),
            "messageTypes": [content_type],
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.proposer]))
    }
}

#[async_trait]
impl KnownMessage for v1::MsgDeposit {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let text = describe_deposit(ctx, &self.depositor, &self.amount, self.proposal_id).await;

        let content = json!({
            "depositor": self.depositor,
            "proposalId": self.proposal_id,
            "amount": coins_to_map(&self.amount),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.depositor]))
    }
}

#[async_trait]
impl KnownMessage for v1beta1::MsgDeposit {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let text = describe_deposit(ctx, &self.depositor, &self.amount, self.proposal_id).await;

        let content = json!({
            "depositor": self.depositor,
            "proposalId": self.proposal_id,
            "amount": coins_to_map(&self.amount),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.depositor]))
    }
}

#[async_trait]
impl KnownMessage for v1::MsgVote {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let text = describe_vote(&self.voter, self.option, self.proposal_id);

        let content = json!({
            "voter": self.voter,
            "proposalId": self.proposal_id,
            "option": VoteOption::name_of(self.option),
            "metadata": self.metadata,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.voter]))
    }
}

#[async_trait]
impl KnownMessage for v1beta1::MsgVote {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let text = describe_vote(&self.voter, self.option, self.proposal_id);

        let content = json!({
            "voter": self.voter,
            "proposalId": self.proposal_id,
            "option": VoteOption::name_of(self.option),
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.voter]))
    }
}

#[async_trait]
impl KnownMessage for v1::MsgVoteWeighted {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let text = describe_weighted_vote(&self.voter, self.proposal_id);

        let content = json!({
            "voter": self.voter,
            "proposalId": self.proposal_id,
            "metadata": self.metadata,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.voter]))
    }
}

#[async_trait]
impl KnownMessage for v1beta1::MsgVoteWeighted {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let text = describe_weighted_vote(&self.voter, self.proposal_id);

        let content = json!({
            "voter": self.voter,
            "proposalId": self.proposal_id,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.voter]))
    }
}
