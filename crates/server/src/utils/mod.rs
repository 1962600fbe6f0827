// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod address;
pub mod format;

pub use address::Bech32Config;
pub use format::{
    coins_to_map, dec_coins_is_zero, dec_coins_to_string, format_legacy_dec, scale_amount,
    sum_dec_coins,
};
