// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_staking_info;

pub use get_staking_info::get_staking_info;
