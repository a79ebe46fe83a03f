// Installer configuration

use crate::config::{parse_env_var, string_env_var};

/// Installer configuration
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    /// Scheduled task name, replaced on reinstall
    pub task_name: String,
    /// Run the task under the SYSTEM account
    pub run_as_system: bool,
    /// Task Scheduler CLI
    pub schtasks_program: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            task_name: String::from("OnBootRunPowerShell"),
            run_as_system: false,
            schtasks_program: String::from("schtasks"),
        }
    }
}

impl InstallerConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            task_name: string_env_var("ONBOOT_TASK_NAME", &defaults.task_name),
            run_as_system: parse_env_var("ONBOOT_RUN_AS_SYSTEM", defaults.run_as_system),
            schtasks_program: string_env_var("ONBOOT_SCHTASKS", &defaults.schtasks_program),
        }
    }
}
