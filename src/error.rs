//! Error types for the cellshare binary

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to read {path}: file too large ({size} bytes, max {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid precision {0}: expected 0 to {max}", max = crate::config::MAX_PRECISION)]
    Precision(usize),
}
