// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

mod get_proposals;

pub use get_proposals::{ProposalsQueryParams, get_proposals};
