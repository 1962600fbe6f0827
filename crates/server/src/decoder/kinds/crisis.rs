// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::generic;
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::crisis::MsgVerifyInvariant;
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
impl KnownMessage for MsgVerifyInvariant {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.sender)
            .write_text(" verifies invariant ")
            .write_text(&self.invariant_module_name)
            .write_text(" at route ")
            .write_text(&self.invariant_route);

        let content = json!({
            "sender": self.sender,
            "invariantModuleName": self.invariant_module_name,
            "invariantRoute": self.invariant_route,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.sender]))
    }
}
