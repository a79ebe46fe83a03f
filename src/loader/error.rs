// Error types for Loader module

use std::path::PathBuf;
use thiserror::Error;

/// Loader error types
///
/// Only `RootUnavailable` and `NotADirectory` escape `Loader::load`; the
/// per-file variants are logged and the file is skipped.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Cannot scan '{path}': {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot scan '{0}': not a directory")]
    NotADirectory(PathBuf),

    #[error("Read error in '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error in '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Top-level value in '{0}' is not a mapping")]
    NotAMapping(PathBuf),

    #[error("Invalid {key} type in '{path}': expected a sequence")]
    InvalidKeyType { path: PathBuf, key: String },
}

pub type Result<T> = std::result::Result<T, LoaderError>;
