// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{Counter, Encoder, HistogramOpts, HistogramVec, IntGauge, Registry, TextEncoder};
use std::sync::Mutex;
use thiserror::Error;

const HTTP_LABELS: &[&str] = &["method", "route", "status_code"];

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics registry is not initialized")]
    NotInitialized,

    #[error("metrics registry lock is poisoned")]
    Poisoned,

    #[error(transparent)]
    Prometheus(#[from] prometheus::Error),

    #[error("metrics output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);

    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.1, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 10.0]),
        HTTP_LABELS
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 50000.0, 100000.0, 500000.0, 1000000.0, 5000000.0]),
        HTTP_LABELS
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref BLOCK_RANGE_TXS: IntGauge = IntGauge::new(
        "block_range_txs",
        "Transactions returned by the last block range request"
    )
    .expect("Failed to create block_range_txs gauge");

    pub static ref BLOCK_RANGE_MISSING_BLOCKS: IntGauge = IntGauge::new(
        "block_range_missing_blocks",
        "Heights that could not be fetched in the last block range request"
    )
    .expect("Failed to create block_range_missing_blocks gauge");

    pub static ref BLOCK_RANGE_ERROR_BLOCKS: IntGauge = IntGauge::new(
        "block_range_error_blocks",
        "Heights with undecodable transactions in the last block range request"
    )
    .expect("Failed to create block_range_error_blocks gauge");
}

/// Registers every metric under `prefix`. Calling it again is a no-op.
pub fn init(prefix: &str) -> Result<(), MetricsError> {
    let mut guard = REGISTRY.lock().map_err(|_| MetricsError::Poisoned)?;
    if guard.is_some() {
        return Ok(());
    }

    let registry = Registry::new_custom(Some(prefix.to_string()), None)?;
    registry.register(Box::new(HTTP_REQUESTS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_SUCCESS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_ERROR.clone()))?;
    registry.register(Box::new(REQUEST_DURATION_SECONDS.clone()))?;
    registry.register(Box::new(RESPONSE_SIZE_BYTES.clone()))?;
    registry.register(Box::new(BLOCK_RANGE_TXS.clone()))?;
    registry.register(Box::new(BLOCK_RANGE_MISSING_BLOCKS.clone()))?;
    registry.register(Box::new(BLOCK_RANGE_ERROR_BLOCKS.clone()))?;

    *guard = Some(registry);
    Ok(())
}

/// Records the shape of a block range scan.
pub fn record_block_scan(txs: usize, missing_blocks: usize, error_blocks: usize) {
    BLOCK_RANGE_TXS.set(txs as i64);
    BLOCK_RANGE_MISSING_BLOCKS.set(missing_blocks as i64);
    BLOCK_RANGE_ERROR_BLOCKS.set(error_blocks as i64);
}

pub fn gather_metric_families() -> Result<Vec<MetricFamily>, MetricsError> {
    let guard = REGISTRY.lock().map_err(|_| MetricsError::Poisoned)?;
    let registry = guard.as_ref().ok_or(MetricsError::NotInitialized)?;
    Ok(registry.gather())
}

/// All metrics in the Prometheus text exposition format.
pub fn gather_metrics() -> Result<String, MetricsError> {
    let families = gather_metric_families()?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
