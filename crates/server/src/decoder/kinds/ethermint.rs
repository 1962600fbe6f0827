// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::decoder::{
    DecodeContext, ExtractError, FriendlyTextBuilder, InvolverRole, InvolversSet, KnownMessage,
    ParseError, ParsedContent,
};
use crate::proto::ethermint::MsgEthereumTx;
use crate::types::TxHash;
use async_trait::async_trait;
use serde_json::json;

impl MsgEthereumTx {
    /// Lower-case `0x` form of the EVM hash, or the raw value when it is not a hash.
    fn normalized_hash(&self) -> String {
        TxHash::parse(&self.hash)
            .map(|hash| hash.to_lower_prefixed())
            .unwrap_or_else(|_| self.hash.clone())
    }
}

#[async_trait]
impl KnownMessage for MsgEthereumTx {
    async fn parse(&self, _ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError> {
        let hash = self.normalized_hash();

        let mut text = FriendlyTextBuilder::new();
        text.write_address(&self.from)
            .write_text(" executes EVM transaction ")
            .write_text(hash.as_str());

        Ok(ParsedContent::new(
            json!({ "hash": hash, "from": self.from }),
            text,
        ))
    }

    async fn involvers(&self, _ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError> {
        let mut involvers = InvolversSet::new();
        involvers.add(InvolverRole::Evm, [&self.from]);
        Ok(involvers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::DecodeHarness;

    fn evm_tx(hash: &str) -> MsgEthereumTx {
        MsgEthereumTx {
            data: None,
            size: 0.0,
            hash: hash.into(),
            from: "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".into(),
        }
    }

    #[tokio::test]
    async fn hash_is_normalized_to_lower_prefixed() {
        let msg = evm_tx("AB12000000000000000000000000000000000000000000000000000000000000");

        let parsed = DecodeHarness::new().parse(&msg).await.unwrap();
        assert_eq!(
            parsed.content["hash"],
            "0xab12000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            parsed.friendly.text,
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed executes EVM transaction 0xab12000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[tokio::test]
    async fn unparseable_hash_is_kept_as_is() {
        let parsed = DecodeHarness::new().parse(&evm_tx("pending")).await.unwrap();
        assert_eq!(parsed.content["hash"], "pending");
    }

    #[tokio::test]
    async fn sender_is_an_evm_involver() {
        let involvers = DecodeHarness::new().involvers(&evm_tx("")).await.unwrap();
        assert!(involvers.contains(InvolverRole::Evm, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(involvers.get(InvolverRole::Generic).is_none());
    }
}
