// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Label attached to every log line shipped to Loki.
const LOKI_SERVICE_LABEL: &str = "cosmos-explorer-rpc";

const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse Loki URL '{url}': {source}")]
    InvalidLokiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to configure Loki integration: {0}")]
    LokiError(#[from] tracing_loki::Error),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
    pub loki_url: Option<&'a str>,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(log: &'a LogConfig) -> Self {
        Self {
            level: &log.level,
            json_format: log.json,
            strip_ansi: log.strip_ansi,
            write_to_file: log.write,
            write_path: &log.write_path,
            write_max_file_size: log.write_max_file_size,
            write_max_files: log.write_max_files,
            loki_url: log.loki_url.as_deref(),
        }
    }
}

/// Filter directives for a configured level.
///
/// `http` is not a tracing level: it keeps everything at `info` and enables the
/// access log, which is emitted at `debug` under the `http` target.
fn filter_directives(level: &str) -> &str {
    if level == "http" { "info,http=debug" } else { level }
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter_directives(level)).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

fn console_layer<S>(json_format: bool, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    if json_format {
        fmt::layer().json().boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(ansi)
            .boxed()
    }
}

fn file_layer<S>(json_format: bool, writer: NonBlocking) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    if json_format {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    }
}

/// Initialize tracing with console output plus the optional file and Loki sinks.
///
/// # Log Rotation
/// When `logs.log` reaches `write_max_file_size` it is rotated to `logs.log.1`,
/// `logs.log.2` and so on. `write_max_files` counts the current file too.
///
/// # Loki Integration
/// Logs are pushed in the background with a `service` label and the process id
/// as an extra field. Must be called from within a Tokio runtime when a Loki URL
/// is configured.
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config.level)?;

    let loki_layer = match config.loki_url {
        Some(url) => {
            let parsed_url =
                url::Url::parse(url).map_err(|source| LoggingError::InvalidLokiUrl {
                    url: url.to_string(),
                    source,
                })?;
            let (layer, task) = tracing_loki::builder()
                .label("service", LOKI_SERVICE_LABEL)?
                .extra_field("pid", std::process::id().to_string())?
                .build_url(parsed_url)?;
            tokio::spawn(task);
            Some(layer)
        }
        None => None,
    };

    let file_layer = if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;
        let appender = BasicRollingFileAppender::new(
            PathBuf::from(config.write_path).join(LOG_FILE_NAME),
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            config.write_max_files.saturating_sub(1),
        )?;
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // The writer flushes on drop of the guard; it has to live as long as the process.
        std::mem::forget(guard);
        Some(file_layer(config.json_format, writer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer(config.json_format, !config.strip_ansi))
        .with(file_layer)
        .with(loki_layer)
        .init();

    Ok(())
}
