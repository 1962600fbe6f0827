// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::generic;
use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolversSet, KnownMessage, ParseError,
    ParsedContent,
};
use crate::proto::bank::{MsgMultiSend, MsgSend};
use crate::utils::coins_to_map;
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
impl KnownMessage for MsgSend {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let metadata = ctx.denoms_metadata(&self.amount).await;

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.from_address)
            .write_text(" transfers ")
            .write_coins(&self.amount, &metadata)
            .write_text(" to ")
            .write_address(&self.to_address);

        let content = json!({
            "transfer": {
                "from": [self.from_address],
                "to": [{
                    "address": self.to_address,
                    "amount": coins_to_map(&self.amount),
                }],
            }
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic([&self.from_address, &self.to_address]))
    }
}

#[async_trait]
impl KnownMessage for MsgMultiSend {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let all_coins: Vec<_> = self
            .outputs
            .iter()
            .flat_map(|output| output.coins.iter().cloned())
            .collect();
        let metadata = ctx.denoms_metadata(&all_coins).await;

        let mut text = FriendlyTextBuilder::new();
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                text.write_text(", ");
            }
            text.write_address(&input.address);
        }
        text.write_text(" transfer ");

        let mut to = Vec::with_capacity(self.outputs.len());
        for (i, output) in self.outputs.iter().enumerate() {
            if i > 0 {
                text.write_text(", ");
            }
            text.write_coins(&output.coins, &metadata)
                .write_text(" to ")
                .write_address(&output.address);
            to.push(json!({
                "address": output.address,
                "amount": coins_to_map(&output.coins),
            }));
        }

        let from: Vec<_> = self.inputs.iter().map(|input| &input.address).collect();
        let content = json!({
            "transfer": {
                "from": from,
                "to": to,
            }
        });
        Ok(ParsedContent::new(content, text))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        Ok(generic(
            self.inputs
                .iter()
                .map(|input| &input.address)
                .chain(self.outputs.iter().map(|output| &output.address)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::InvolverRole;
    use crate::proto::Coin;
    use crate::proto::bank::{Input, Output};
    use crate::test_fixtures::{DecodeHarness, MockChainClient, metadata_with_exponent};

    #[tokio::test]
    async fn send_describes_transfer_with_display_units() {
        let harness = DecodeHarness::with_chain(
            MockChainClient::new().with_denom_metadata(metadata_with_exponent("uatom", "ATOM", 6)),
        );
        let msg = MsgSend {
            from_address: "cosmos1alice".into(),
            to_address: "cosmos1bob".into(),
            amount: vec![Coin::new("2500000", "uatom")],
        };

        let parsed = harness.parse(&msg).await.unwrap();

        assert_eq!(parsed.friendly.text, "cosmos1alice transfers 2.5 ATOM to cosmos1bob");
        assert_eq!(
            parsed.content,
            json!({
                "transfer": {
                    "from": ["cosmos1alice"],
                    "to": [{ "address": "cosmos1bob", "amount": { "uatom": "2500000" } }],
                }
            })
        );

        let involvers = harness.involvers(&msg).await.unwrap();
        assert!(involvers.contains(InvolverRole::Generic, "cosmos1alice"));
        assert!(involvers.contains(InvolverRole::Generic, "cosmos1bob"));
    }

    #[tokio::test]
    async fn multi_send_lists_every_receiver() {
        let harness = DecodeHarness::new();
        let msg = MsgMultiSend {
            inputs: vec![Input {
                address: "in".into(),
                coins: vec![Coin::new("6", "uatom")],
            }],
            outputs: (1..=3)
                .map(|n| Output {
                    address: format!("out{n}"),
                    coins: vec![Coin::new(n.to_string(), "uatom")],
                })
                .collect(),
        };

        let parsed = harness.parse(&msg).await.unwrap();

        let to = parsed.content["transfer"]["to"].as_array().unwrap();
        assert_eq!(to.len(), 3);
        assert_eq!(to[2], json!({ "address": "out3", "amount": { "uatom": "3" } }));
        assert_eq!(
            parsed.friendly.text,
            "in transfer 1uatom to out1, 2uatom to out2, 3uatom to out3"
        );
        assert_eq!(parsed.friendly.text.matches(", ").count(), 2);

        let involvers = harness.involvers(&msg).await.unwrap();
        assert_eq!(involvers.get(InvolverRole::Generic).unwrap().len(), 4);
    }

    #[tokio::test]
    async fn multi_send_joins_senders() {
        let harness = DecodeHarness::new();
        let msg = MsgMultiSend {
            inputs: vec![
                Input {
                    address: "a".into(),
                    coins: vec![],
                },
                Input {
                    address: "b".into(),
                    coins: vec![],
                },
            ],
            outputs: vec![Output {
                address: "c".into(),
                coins: vec![Coin::new("1", "uatom")],
            }],
        };

        let parsed = harness.parse(&msg).await.unwrap();
        assert_eq!(parsed.friendly.text, "a, b transfer 1uatom to c");
        assert_eq!(parsed.content["transfer"]["from"], json!(["a", "b"]));
    }
}
