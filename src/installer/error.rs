// Installer errors

use std::path::PathBuf;
use thiserror::Error;

/// Installer errors
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("could not get executable path: {0}")]
    ExecutablePath(#[source] std::io::Error),

    #[error("could not resolve target path '{0}': {1}")]
    TargetPath(PathBuf, #[source] std::io::Error),

    #[error("failed to launch schtasks: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("schtasks exited with {}", exit_code_text(.0))]
    SchtasksFailed(Option<i32>),
}

fn exit_code_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
