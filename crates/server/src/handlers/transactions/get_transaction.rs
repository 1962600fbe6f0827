// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::backend::{BackendError, TxResponse, with_deadline};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /v1/transactions/:hash
///
/// Accepts the CometBFT hash in any case, with or without `0x`.
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<TxResponse>, BackendError> {
    let response = with_deadline(
        state.request_timeout(),
        state.backend.transaction_by_hash(&hash),
    )
    .await?;
    Ok(Json(response))
}
