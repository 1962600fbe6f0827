// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::generic;
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::evidence::MsgSubmitEvidence;
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
impl KnownMessage for MsgSubmitEvidence {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.submitter).write_text(" submits evidence");

        Ok(ParsedContent::new(json!({ "submitter": self.submitter }), text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.submitter]))
    }
}
