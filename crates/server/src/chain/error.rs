// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Failure of a single query against the chain node.
#[derive(Debug, Error)]
pub enum ChainQueryError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<String>,
    },

    #[error("ABCI query {path} failed with code {code}: {log}")]
    Abci { path: String, code: u32, log: String },

    #[error("Malformed RPC response: {0}")]
    MalformedResponse(String),

    #[error("Failed to decode protobuf payload: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Failed to decode base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
