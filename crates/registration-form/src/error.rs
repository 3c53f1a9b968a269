// File: src/error.rs
// Purpose: Errors of the configuration layer

use std::path::PathBuf;
use thiserror::Error;

/// Validation never fails; only loading configuration can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid form config: {0}")]
    Parse(#[from] toml::de::Error),
}
