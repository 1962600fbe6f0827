// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

#[macro_use]
mod error;

pub mod blocks;
pub mod gov;
pub mod health;
pub mod metrics;
pub mod staking;
pub mod transactions;

pub use error::error_response;
