// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use clap::Parser;
use std::io::ErrorKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.mainnet)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Loads `env_file` into the process environment.
    ///
    /// A missing file is not an error; variables may come from the real environment.
    /// Returns whether a file was loaded.
    pub fn load_env_file(&self) -> Result<bool, ConfigError> {
        match dotenv::from_filename(&self.env_file) {
            Ok(_) => Ok(true),
            Err(dotenv::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(ConfigError::EnvFileError {
                path: self.env_file.clone(),
                source,
            }),
        }
    }
}
