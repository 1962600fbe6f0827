// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::generic;
use crate::decoder::registry::MAX_NESTED_MESSAGE_DEPTH;
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::Any;
use crate::proto::authz::{MsgExec, MsgGrant, MsgRevoke};
use async_trait::async_trait;
use chrono::DateTime;
use serde_json::{Value, json};

#[async_trait]
impl KnownMessage for MsgGrant {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let grant = self.grant.clone().unwrap_or_default();
        let authorization = grant
            .authorization
            .map(|any| any.type_url)
            .unwrap_or_default();

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.granter)
            .write_text(" grants ")
            .write_text(authorization.as_str())
            .write_text(" to ")
            .write_address(&self.grantee);

        let expiration = grant.expiration.and_then(|ts| {
            DateTime::from_timestamp(ts.seconds, u32::try_from(ts.nanos).unwrap_or(0))
        });
        if let Some(expiration) = expiration {
            text.write_text(format!(
                " with expiration {} UTC",
                expiration.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        let mut parsed = ParsedContent::new(
            json!({
                "granter": self.granter,
                "grantee": self.grantee,
                "authorization": authorization,
            }),
            text,
        );
        if let Some(expiration) = expiration {
            parsed.insert("expirationEpochUTC", json!(expiration.timestamp()));
        }
        Ok(parsed)
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.granter, &self.grantee]))
    }
}

/// Entry of `authorized-messages`: the nested message's content, or only why it has none.
async fn describe_authorized(any: &Any, ctx: &DecodeContext<'_>) -> Value {
    let msg = match ctx.registry.unpack(any) {
        Ok(msg) => msg,
        Err(e) => return json!({ "error": format!("failed to unpack authorized message: {e}") }),
    };

    let parsed = match ctx.nested() {
        Some(nested) => {
            ctx.registry
                .default_parser()
                .parse(msg.as_ref(), &nested)
                .await
        }
        None => Err(ParseError::UnsupportedDetail(format!(
            "authorized messages nested deeper than {MAX_NESTED_MESSAGE_DEPTH} levels"
        ))),
    };
    match parsed {
        Ok(parsed) => json!({
            "type": any.type_url,
            "content": parsed.content,
            "friendlyText": parsed.friendly.text,
            "friendlyFragments": parsed.friendly.fragments,
        }),
        Err(e) => json!({ "error": format!("failed to parse authorized message: {e}") }),
    }
}

#[async_trait]
impl KnownMessage for MsgExec {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.grantee)
            .write_text(" executes authorized messages");

        let mut parsed = ParsedContent::new(json!({ "grantee": self.grantee }), text);
        if !self.msgs.is_empty() {
            let mut entries = Vec::with_capacity(self.msgs.len());
            for any in &self.msgs {
                entries.push(describe_authorized(any, ctx).await);
            }
            parsed.insert("authorized-messages", Value::Array(entries));
        }
        Ok(parsed)
    }

    async fn involvers(&self, ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        let mut involvers = generic([&self.grantee]);
        let Some(nested) = ctx.nested() else {
            return Ok(involvers);
        };

        for any in &self.msgs {
            let msg = match ctx.registry.unpack(any) {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!(tx_hash = ctx.tx_hash, error = %e, "Skipping undecodable authorized message");
                    continue;
                }
            };
            match ctx
                .registry
                .default_extractor()
                .extract(msg.as_ref(), &nested)
                .await
            {
                Ok(found) => {
                    involvers.merge(found);
                }
                Err(e) => {
                    tracing::debug!(tx_hash = ctx.tx_hash, error = %e, "Skipping involvers of authorized message");
                }
            }
        }
        Ok(involvers)
    }
}

#[async_trait]
impl KnownMessage for MsgRevoke {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.granter)
            .write_text(" revokes permission ")
            .write_text(self.msg_type_url.as_str())
            .write_text(" from ")
            .write_address(&self.grantee);

        let content = json!({
            "granter": self.granter,
            "grantee": self.grantee,
            "authorization": self.msg_type_url,
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.granter, &self.grantee]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::InvolverRole;
    use crate::proto::authz::Grant;
    use crate::proto::bank::MsgSend;
    use crate::proto::{Coin, Timestamp, to_any};
    use crate::test_fixtures::DecodeHarness;

    fn send(from: &str, to: &str) -> Any {
        to_any(&MsgSend {
            from_address: from.into(),
            to_address: to.into(),
            amount: vec![Coin::new("1", "uatom")],
        })
    }

    #[tokio::test]
    async fn grant_with_expiration() {
        let msg = MsgGrant {
            granter: "alice".into(),
            grantee: "bob".into(),
            grant: Some(Grant {
                authorization: Some(Any {
                    type_url: "/cosmos.authz.v1beta1.GenericAuthorization".into(),
                    value: Vec::new(),
                }),
                expiration: Some(Timestamp {
                    seconds: 1_735_689_600,
                    nanos: 0,
                }),
            }),
        };

        let parsed = DecodeHarness::new().parse(&msg).await.unwrap();
        assert_eq!(
            parsed.friendly.text,
            "alice grants /cosmos.authz.v1beta1.GenericAuthorization to bob with expiration 2025-01-01 00:00:00 UTC"
        );
        assert_eq!(parsed.content["expirationEpochUTC"], 1_735_689_600);
    }

    #[tokio::test]
    async fn grant_without_authorization_or_expiration() {
        let msg = MsgGrant {
            granter: "alice".into(),
            grantee: "bob".into(),
            grant: None,
        };

        let parsed = DecodeHarness::new().parse(&msg).await.unwrap();
        assert_eq!(parsed.friendly.text, "alice grants  to bob");
        assert_eq!(parsed.content["authorization"], "");
        assert!(parsed.content.get("expirationEpochUTC").is_none());
    }

    #[tokio::test]
    async fn exec_describes_each_authorized_message() {
        let msg = MsgExec {
            grantee: "grantee".into(),
            msgs: vec![
                send("alice", "bob"),
                Any {
                    type_url: "/cosmos.bank.v1beta1.MsgSend".into(),
                    value: vec![0xff, 0xff, 0xff],
                },
                Any {
                    type_url: "/unknown.v1.MsgNothing".into(),
                    value: Vec::new(),
                },
            ],
        };

        let parsed = DecodeHarness::new().parse(&msg).await.unwrap();
        assert_eq!(parsed.friendly.text, "grantee executes authorized messages");

        let entries = parsed.content["authorized-messages"].as_array().unwrap();
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0]["type"], "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(entries[0]["content"]["transfer"]["from"], json!(["alice"]));
        assert_eq!(entries[0]["friendlyText"], "alice transfers 1uatom to bob");

        let undecodable = entries[1].as_object().unwrap();
        assert_eq!(undecodable.len(), 1);
        assert!(
            undecodable["error"]
                .as_str()
                .unwrap()
                .starts_with("failed to unpack authorized message: ")
        );

        assert_eq!(
            entries[2],
            json!({
                "error": "failed to parse authorized message: not supported message type unknown.v1.MsgNothing"
            })
        );
    }

    #[tokio::test]
    async fn exec_without_messages_has_no_entries() {
        let msg = MsgExec {
            grantee: "grantee".into(),
            msgs: Vec::new(),
        };
        let parsed = DecodeHarness::new().parse(&msg).await.unwrap();
        assert_eq!(parsed.content, json!({ "grantee": "grantee" }));
    }

    #[tokio::test]
    async fn deeply_nested_exec_stops_at_depth_limit() {
        let mut msg = MsgExec {
            grantee: "g0".into(),
            msgs: vec![send("alice", "bob")],
        };
        for level in 1..=MAX_NESTED_MESSAGE_DEPTH + 1 {
            msg = MsgExec {
                grantee: format!("g{level}"),
                msgs: vec![to_any(&msg)],
            };
        }

        let parsed = DecodeHarness::new().parse(&msg).await.unwrap();
        let rendered = parsed.content.to_string();
        assert!(rendered.contains("nested deeper than"));
        assert!(!rendered.contains("alice transfers"));
    }

    #[tokio::test]
    async fn exec_involvers_include_nested_parties() {
        let msg = MsgExec {
            grantee: "grantee".into(),
            msgs: vec![
                send("alice", "bob"),
                Any {
                    type_url: "/cosmos.bank.v1beta1.MsgSend".into(),
                    value: vec![0xff],
                },
            ],
        };

        let involvers = DecodeHarness::new().involvers(&msg).await.unwrap();
        let generic = involvers.get(InvolverRole::Generic).unwrap();
        assert_eq!(
            generic.iter().map(String::as_str).collect::<Vec<_>>(),
            ["alice", "bob", "grantee"]
        );
    }

    #[tokio::test]
    async fn revoke() {
        let msg = MsgRevoke {
            granter: "alice".into(),
            grantee: "bob".into(),
            msg_type_url: "/cosmos.bank.v1beta1.MsgSend".into(),
        };
        let parsed = DecodeHarness::new().parse(&msg).await.unwrap();
        assert_eq!(
            parsed.friendly.text,
            "alice revokes permission /cosmos.bank.v1beta1.MsgSend from bob"
        );
    }
}
