// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::backend::{BackendError, ProposalsPage, with_deadline};
use crate::consts::DEFAULT_PROPOSALS_PAGE;
use crate::extractors::JsonQuery;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde::Deserialize;

fn default_page() -> i64 {
    DEFAULT_PROPOSALS_PAGE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposalsQueryParams {
    #[serde(default = "default_page")]
    pub page: i64,
}

/// Handler for GET /v1/gov/proposals
pub async fn get_proposals(
    State(state): State<AppState>,
    JsonQuery(params): JsonQuery<ProposalsQueryParams>,
) -> Result<Json<ProposalsPage>, BackendError> {
    let page = with_deadline(
        state.request_timeout(),
        state.backend.gov_proposals(params.page),
    )
    .await?;
    Ok(Json(page))
}
