// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::backend::{BackendError, StakingInfo, with_deadline};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /v1/staking/:address
///
/// `address` may be an account address, a validator operator address or a
/// `0x` hex address.
pub async fn get_staking_info(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<StakingInfo>, BackendError> {
    let info = with_deadline(
        state.request_timeout(),
        state.backend.staking_info(&address),
    )
    .await?;
    Ok(Json(info))
}
