// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

/// Source repository, advertised by the root endpoint.
pub const REPOSITORY_URL: &str = "https://github.com/bcdevtools/cosmos-explorer-rpc";

/// Page served by the proposals endpoint when `page` is omitted.
pub const DEFAULT_PROPOSALS_PAGE: i64 = 1;

/// Every endpoint is a GET; request bodies are capped well below anything useful.
pub const REQUEST_BODY_LIMIT_BYTES: usize = 16 * 1024;
