// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::generic;
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::slashing::MsgUnjail;
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
impl KnownMessage for MsgUnjail {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.validator_addr).write_text(" un-jails");

        Ok(ParsedContent::new(json!({ "validator": self.validator_addr }), text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.validator_addr]))
    }
}
