// Executor configuration

use crate::config::string_env_var;

/// Executor configuration
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// PowerShell program used for `raw_ps` commands
    pub powershell_program: String,
    /// Command interpreter used for `raw_cmd` commands
    pub cmd_program: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            powershell_program: String::from("powershell"),
            cmd_program: String::from("cmd"),
        }
    }
}

impl ExecutorConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            powershell_program: string_env_var("ONBOOT_POWERSHELL", &defaults.powershell_program),
            cmd_program: string_env_var("ONBOOT_CMD", &defaults.cmd_program),
        }
    }
}
