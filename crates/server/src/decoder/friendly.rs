// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Human-readable description of a message, built alongside its structured content.

use super::denoms::DenomsMetadata;
use crate::proto::Coin;
use crate::utils::{coins_to_map, scale_amount};
use serde::Serialize;
use serde_json::{Map, Value};

/// One piece of a friendly sentence, tagged with what it refers to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FriendlyFragment {
    Text {
        value: String,
    },
    Address {
        value: String,
    },
    Coins {
        value: String,
        coins: Map<String, Value>,
    },
}

impl FriendlyFragment {
    /// The text this fragment contributes to the sentence.
    pub fn value(&self) -> &str {
        match self {
            Self::Text { value } | Self::Address { value } | Self::Coins { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FriendlyText {
    pub text: String,
    pub fragments: Vec<FriendlyFragment>,
}

#[derive(Debug, Default)]
pub struct FriendlyTextBuilder {
    text: String,
    fragments: Vec<FriendlyFragment>,
}

impl FriendlyTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_text(&mut self, text: impl Into<String>) -> &mut Self {
        let value = text.into();
        self.push(FriendlyFragment::Text { value })
    }

    pub fn write_address(&mut self, address: impl Into<String>) -> &mut Self {
        let value = address.into();
        self.push(FriendlyFragment::Address { value })
    }

    /// Appends coins scaled to their display unit, joined with `", "`.
    pub fn write_coins(&mut self, coins: &[Coin], metadata: &DenomsMetadata) -> &mut Self {
        let value = coins
            .iter()
            .map(|coin| display_coin(coin, metadata))
            .collect::<Vec<_>>()
            .join(", ");
        self.push(FriendlyFragment::Coins {
            value,
            coins: coins_to_map(coins),
        })
    }

    pub fn finalize(self) -> FriendlyText {
        FriendlyText {
            text: self.text,
            fragments: self.fragments,
        }
    }

    fn push(&mut self, fragment: FriendlyFragment) -> &mut Self {
        self.text.push_str(fragment.value());
        self.fragments.push(fragment);
        self
    }
}

/// `1.5 ATOM` when the denom has display metadata, `1500000uatom` otherwise.
fn display_coin(coin: &Coin, metadata: &DenomsMetadata) -> String {
    let raw = || format!("{}{}", coin.amount, coin.denom);

    let Some(meta) = metadata.get(&coin.denom) else {
        return raw();
    };
    let Some(unit) = meta.display_unit() else {
        return raw();
    };
    let Some(amount) = scale_amount(&coin.amount, unit.exponent) else {
        return raw();
    };

    let symbol = if meta.symbol.is_empty() {
        &unit.denom
    } else {
        &meta.symbol
    };
    format!("{amount} {symbol}")
}
