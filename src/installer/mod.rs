// Installer module - registers the runner as a Task Scheduler startup task

pub mod config;
pub mod error;
pub mod schtasks;

pub use config::InstallerConfig;
pub use error::{InstallError, Result};
pub use schtasks::Installer;
