// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_block_range_transactions;

pub use get_block_range_transactions::{BlockRangeQueryParams, get_block_range_transactions};
