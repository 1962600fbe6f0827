// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

const VALID_LEVELS: [&str; 6] = ["trace", "debug", "http", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level '{0}'. Must be one of: {levels}", levels = VALID_LEVELS.join(", "))]
    InvalidLevel(String),

    #[error("Log write path cannot be empty when file logging is enabled")]
    EmptyWritePath,

    #[error("Log file size and file count must be greater than 0")]
    InvalidRotation,

    #[error("Invalid Loki URL '{0}'")]
    InvalidLokiUrl(String),
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log Level
    ///
    /// Env: BE_LOG_LEVEL
    /// Valid values: trace, debug, http, info, warn, error
    /// Default: info
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: BE_LOG_JSON
    /// Default: false
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: BE_LOG_STRIP_ANSI
    /// Default: false
    pub strip_ansi: bool,

    /// Also write logs to rolling files
    ///
    /// Env: BE_LOG_WRITE
    /// Default: false
    pub write: bool,

    /// Directory for rolling log files
    ///
    /// Env: BE_LOG_WRITE_PATH
    /// Default: ./logs
    pub write_path: String,

    /// Maximum size of a single log file, in bytes
    ///
    /// Env: BE_LOG_WRITE_MAX_FILE_SIZE
    /// Default: 5242880
    pub write_max_file_size: u64,

    /// Number of rotated log files to keep
    ///
    /// Env: BE_LOG_WRITE_MAX_FILES
    /// Default: 5
    pub write_max_files: usize,

    /// Loki push endpoint; logs are shipped there when set
    ///
    /// Env: BE_LOG_LOKI_URL
    pub loki_url: Option<String>,
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), LogError> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(LogError::InvalidLevel(self.level.clone()));
        }

        if self.write {
            if self.write_path.trim().is_empty() {
                return Err(LogError::EmptyWritePath);
            }
            if self.write_max_file_size == 0 || self.write_max_files == 0 {
                return Err(LogError::InvalidRotation);
            }
        }

        if let Some(loki_url) = &self.loki_url {
            match url::Url::parse(loki_url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                _ => return Err(LogError::InvalidLokiUrl(loki_url.clone())),
            }
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            strip_ansi: false,
            write: false,
            write_path: "./logs".to_string(),
            write_max_file_size: 5 * 1024 * 1024,
            write_max_files: 5,
            loki_url: None,
        }
    }
}
