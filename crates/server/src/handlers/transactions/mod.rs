// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_transaction;

pub use get_transaction::get_transaction;
