// Error types for Executor module

use thiserror::Error;

/// Executor error types
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Failed to launch {0} for '{1}': {2}")]
    SpawnFailed(String, String, #[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
