// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use primitive_types::H256;
use regex::Regex;
use std::fmt;
use thiserror::Error;

lazy_static! {
    static ref TX_HASH_PATTERN: Regex =
        Regex::new(r"^(0[xX])?[0-9a-fA-F]{64}$").expect("valid tx hash regex");
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TxHashError {
    #[error("invalid transaction hash: expected 64 hex characters, optionally 0x-prefixed")]
    InvalidFormat,
}

/// A 32-byte transaction hash, either a CometBFT hash or an EVM one.
///
/// Accepts any case and an optional `0x`/`0X` prefix; all renderings are derived
/// from the bytes, so normalizing twice yields the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash(pub H256);

impl TxHash {
    pub fn parse(input: &str) -> Result<Self, TxHashError> {
        if !TX_HASH_PATTERN.is_match(input) {
            return Err(TxHashError::InvalidFormat);
        }
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| TxHashError::InvalidFormat)?;
        Ok(Self(H256(bytes)))
    }

    /// `0x` followed by lower-case hex, the form EVM tooling expects.
    pub fn to_lower_prefixed(&self) -> String {
        format!("0x{}", hex::encode(self.0.as_bytes()))
    }

    /// Upper-case hex without prefix, as CometBFT reports transaction hashes.
    pub fn to_native(&self) -> String {
        hex::encode_upper(self.0.as_bytes())
    }
}

/// Canonical form: `0x` followed by upper-case hex.
impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_native())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: &str = "4c6d9b2b1f0e3a5d7c8b9a0f1e2d3c4b5a69788796a5b4c3d2e1f0a1b2c3d4e5";

    #[test]
    fn test_parse_accepts_every_prefix_and_case() {
        let expected = TxHash::parse(LOWER).unwrap();
        for input in [
            LOWER.to_string(),
            LOWER.to_uppercase(),
            format!("0x{LOWER}"),
            format!("0X{}", LOWER.to_uppercase()),
        ] {
            assert_eq!(TxHash::parse(&input).unwrap(), expected, "input {input}");
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = TxHash::parse(LOWER).unwrap().to_string();
        let twice = TxHash::parse(&once).unwrap().to_string();
        assert_eq!(once, twice);
        assert_eq!(once, format!("0x{}", LOWER.to_uppercase()));
    }

    #[test]
    fn test_renderings() {
        let hash = TxHash::parse(&LOWER.to_uppercase()).unwrap();
        assert_eq!(hash.to_native(), LOWER.to_uppercase());
        assert_eq!(hash.to_lower_prefixed(), format!("0x{LOWER}"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in [
            String::new(),
            "0x".to_string(),
            LOWER[1..].to_string(),
            format!("{LOWER}00"),
            format!("0x{}", LOWER.replace('a', "g")),
            format!("1x{}", &LOWER[2..]),
        ] {
            assert_eq!(TxHash::parse(&input), Err(TxHashError::InvalidFormat), "input {input}");
        }
    }
}
