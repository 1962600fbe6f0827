// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod blocks;
pub mod gov;
pub mod health;
pub mod metrics;
pub mod registry;
pub mod root;
pub mod staking;
pub mod transactions;

pub use registry::{API_VERSION, RegisterRoute, RouteInfo, RouteRegistry};
