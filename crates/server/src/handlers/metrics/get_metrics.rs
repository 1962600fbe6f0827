// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::handlers::error_response;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prometheus::proto::{Metric, MetricFamily};
use serde_json::{Value, json};

/// Prometheus text exposition.
pub async fn get_metrics() -> Response {
    match crate::metrics::gather_metrics() {
        Ok(metrics) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            metrics,
        )
            .into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {e}"),
        ),
    }
}

fn metric_value(metric: &Metric) -> Value {
    if metric.has_counter() {
        json!(metric.get_counter().get_value())
    } else if metric.has_gauge() {
        json!(metric.get_gauge().get_value())
    } else if metric.has_histogram() {
        let histogram = metric.get_histogram();
        json!({
            "sample_count": histogram.get_sample_count(),
            "sample_sum": histogram.get_sample_sum(),
        })
    } else {
        Value::Null
    }
}

fn family_json(family: &MetricFamily) -> Value {
    let metrics: Vec<Value> = family
        .get_metric()
        .iter()
        .map(|metric| {
            let labels: Vec<Value> = metric
                .get_label()
                .iter()
                .map(|label| json!({ "name": label.get_name(), "value": label.get_value() }))
                .collect();
            json!({ "labels": labels, "value": metric_value(metric) })
        })
        .collect();

    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": metrics,
    })
}

/// The same metrics as JSON.
pub async fn get_metrics_json() -> Response {
    match crate::metrics::gather_metric_families() {
        Ok(families) => {
            let body: Vec<Value> = families.iter().map(family_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {e}"),
        ),
    }
}
