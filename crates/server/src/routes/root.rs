// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Service description and the list of mounted routes.

use crate::consts::REPOSITORY_URL;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let routes = state.route_registry.routes();

    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "github": REPOSITORY_URL,
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "accountPrefix": state.backend.addresses().account_prefix,
        "routes": routes
    }))
}
