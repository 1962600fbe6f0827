// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::backend::{BackendError, BlockScanResult, with_deadline};
use crate::extractors::JsonQuery;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlockRangeQueryParams {
    pub from: i64,
    /// Inclusive upper bound; omitted or 0 scans `from` only.
    #[serde(default)]
    pub to: i64,
}

/// Handler for GET /v1/blocks/transactions
pub async fn get_block_range_transactions(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<BlockRangeQueryParams>,
) -> Result<Json<BlockScanResult>, BackendError> {
    let result = with_deadline(
        state.request_timeout(),
        state
            .backend
            .transactions_in_block_range(params.from, params.to),
    )
    .await?;

    crate::metrics::record_block_scan(
        result.tx_count(),
        result.missing_blocks.len(),
        result.error_blocks.len(),
    );
    Ok(Json(result))
}
