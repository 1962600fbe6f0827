// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bech32 address classification and conversion.

use bech32::{Bech32, Hrp};

/// Cosmos SDK rejects addresses longer than this many bytes.
const MAX_ADDRESS_LEN: usize = 255;

/// Human-readable prefixes of the chain's account and validator addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Config {
    pub account_prefix: String,
    pub validator_prefix: String,
}

impl Bech32Config {
    pub fn new(account_prefix: impl Into<String>, validator_prefix: impl Into<String>) -> Self {
        Self {
            account_prefix: account_prefix.into(),
            validator_prefix: validator_prefix.into(),
        }
    }

    pub fn is_account_address(&self, value: &str) -> bool {
        decode_with_prefix(value, &self.account_prefix).is_some()
    }

    pub fn is_validator_address(&self, value: &str) -> bool {
        decode_with_prefix(value, &self.validator_prefix).is_some()
    }

    /// Converts an account, validator or `0x`-hex address into the account form.
    ///
    /// Returns `None` when the input is none of those.
    pub fn to_account_address(&self, value: &str) -> Option<String> {
        if self.is_account_address(value) {
            return Some(value.to_string());
        }

        let data = match decode_with_prefix(value, &self.validator_prefix) {
            Some(data) => data,
            None => {
                let digits = value.strip_prefix("0x")?;
                if digits.len() != 40 {
                    return None;
                }
                hex::decode(digits).ok()?
            }
        };

        let hrp = Hrp::parse(&self.account_prefix).ok()?;
        bech32::encode::<Bech32>(hrp, &data).ok()
    }
}

fn decode_with_prefix(value: &str, prefix: &str) -> Option<Vec<u8>> {
    let (hrp, data) = bech32::decode(value).ok()?;
    if hrp.to_string().to_lowercase() != prefix.to_lowercase() {
        return None;
    }
    if data.is_empty() || data.len() > MAX_ADDRESS_LEN {
        return None;
    }
    Some(data)
}
