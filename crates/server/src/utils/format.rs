// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display helpers for coins and fixed-point decimals.

use crate::proto::{Coin, DecCoin};
use primitive_types::U256;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fractional digits of a Cosmos SDK `LegacyDec`.
pub const LEGACY_DEC_PRECISION: usize = 18;

/// Largest exponent for which `10^exponent` fits into a `U256`.
const MAX_EXPONENT: u32 = 77;

/// `{denom: amount}` view of a coin list.
pub fn coins_to_map(coins: &[Coin]) -> Map<String, Value> {
    coins
        .iter()
        .map(|coin| (coin.denom.clone(), Value::String(coin.amount.clone())))
        .collect()
}

/// Divides an integer amount by `10^exponent` and renders it without trailing zeros.
///
/// `None` when the amount is not an unsigned integer or the exponent is out of range.
pub fn scale_amount(amount: &str, exponent: u32) -> Option<String> {
    if exponent > MAX_EXPONENT || amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = U256::from_dec_str(amount).ok()?;
    if exponent == 0 {
        return Some(value.to_string());
    }

    let (whole, fraction) = value.div_mod(U256::exp10(exponent as usize));
    if fraction.is_zero() {
        return Some(whole.to_string());
    }

    let fraction = format!("{:0>width$}", fraction.to_string(), width = exponent as usize);
    Some(format!("{whole}.{}", fraction.trim_end_matches('0')))
}

/// Renders the integer representation of a `LegacyDec` with its 18 fractional digits.
///
/// Input that is not an integer is returned unchanged.
pub fn format_legacy_dec(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let padded = format!("{:0>width$}", digits, width = LEGACY_DEC_PRECISION + 1);
    let (whole, fraction) = padded.split_at(padded.len() - LEGACY_DEC_PRECISION);
    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    format!("{sign}{whole}.{fraction}")
}

/// Sums dec coins per denomination, dropping zero totals; the result is sorted by denom.
///
/// Amounts that are not unsigned integers are skipped.
pub fn sum_dec_coins<'a>(coins: impl IntoIterator<Item = &'a DecCoin>) -> Vec<DecCoin> {
    let mut totals: BTreeMap<&str, U256> = BTreeMap::new();
    for coin in coins {
        let Ok(amount) = U256::from_dec_str(&coin.amount) else {
            tracing::debug!(denom = %coin.denom, amount = %coin.amount, "Skipping unparseable dec coin");
            continue;
        };
        let total = totals.entry(coin.denom.as_str()).or_default();
        *total = total.saturating_add(amount);
    }

    totals
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(denom, amount)| DecCoin {
            denom: denom.to_string(),
            amount: amount.to_string(),
        })
        .collect()
}

/// `1.500000000000000000uatom,2.000000000000000000uosmo`
pub fn dec_coins_to_string(coins: &[DecCoin]) -> String {
    coins
        .iter()
        .map(|coin| format!("{}{}", format_legacy_dec(&coin.amount), coin.denom))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn dec_coins_is_zero(coins: &[DecCoin]) -> bool {
    coins
        .iter()
        .all(|coin| coin.amount.trim_start_matches('0').is_empty())
}
