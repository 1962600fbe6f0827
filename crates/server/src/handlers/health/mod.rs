// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_health;

pub use get_health::{HealthResponse, get_health};
