// Executor module - runs collected commands through external interpreters

pub mod config;
pub mod error;
pub mod external;
pub mod runner;
pub mod shell;
pub mod types;

pub use config::ExecutorConfig;
pub use error::{ExecutorError, Result};
pub use external::ExternalShell;
pub use runner::Executor;
pub use shell::Shell;
pub use types::{CommandStatus, RunReport};
