// Interpreters launched as child processes

use crate::executor::{CommandStatus, ExecutorError, Result, Shell};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

/// Runs each line as `<program> <leading args...> <line>`
///
/// Standard output and error are inherited, so command output goes straight
/// to the runner's console.
#[derive(Debug, Clone)]
pub struct ExternalShell {
    name: String,
    program: String,
    leading_args: Vec<String>,
    /// Pass the line unquoted (cmd.exe does its own parsing)
    #[cfg_attr(not(windows), allow(dead_code))]
    raw_line: bool,
}

impl ExternalShell {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        leading_args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
            raw_line: false,
        }
    }

    /// PowerShell without profile and with an unrestricted execution policy
    pub fn powershell(program: impl Into<String>) -> Self {
        Self::new(
            "powershell",
            program,
            ["-NoProfile", "-ExecutionPolicy", "Bypass", "-Command"],
        )
    }

    /// cmd.exe running a single command line
    pub fn cmd(program: impl Into<String>) -> Self {
        Self {
            raw_line: true,
            ..Self::new("cmd", program, ["/C"])
        }
    }

    fn build(&self, line: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args);
        self.push_line(&mut command, line);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    #[cfg(windows)]
    fn push_line(&self, command: &mut Command, line: &str) {
        if self.raw_line {
            command.raw_arg(line);
        } else {
            command.arg(line);
        }
    }

    #[cfg(not(windows))]
    fn push_line(&self, command: &mut Command, line: &str) {
        command.arg(line);
    }
}

#[async_trait]
impl Shell for ExternalShell {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, line: &str) -> Result<CommandStatus> {
        let start = Instant::now();

        let status = self
            .build(line)
            .status()
            .await
            .map_err(|e| ExecutorError::SpawnFailed(self.name.clone(), line.to_string(), e))?;

        debug!(
            shell = %self.name,
            program = %self.program,
            duration_ms = start.elapsed().as_millis() as u64,
            exit_code = status.code().unwrap_or(-1),
            "interpreter exited"
        );

        Ok(status.into())
    }
}
