// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod backend;
pub mod chain;
pub mod consts;
pub mod decoder;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod proto;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;
