// Main Executor implementation

use crate::executor::config::ExecutorConfig;
use crate::executor::external::ExternalShell;
use crate::executor::shell::Shell;
use crate::executor::types::RunReport;
use crate::loader::CommandSet;
use tracing::{debug, error, info, warn};

/// Runs a `CommandSet`: every PowerShell command first, then every cmd.exe
/// command, one at a time
pub struct Executor {
    powershell: Box<dyn Shell>,
    cmd: Box<dyn Shell>,
}

impl Executor {
    pub fn new(config: ExecutorConfig) -> Self {
        debug!(
            powershell = %config.powershell_program,
            cmd = %config.cmd_program,
            "initializing executor"
        );

        Self::with_shells(
            Box::new(ExternalShell::powershell(config.powershell_program)),
            Box::new(ExternalShell::cmd(config.cmd_program)),
        )
    }

    /// Build with explicit interpreter strategies
    pub fn with_shells(powershell: Box<dyn Shell>, cmd: Box<dyn Shell>) -> Self {
        Self { powershell, cmd }
    }

    /// Run every command in order
    ///
    /// Failures are logged and counted; they never stop the pass.
    pub async fn execute(&self, commands: &CommandSet) -> RunReport {
        let mut report = RunReport::default();

        if commands.is_empty() {
            info!("No commands found");
            return report;
        }

        run_all(&*self.powershell, &commands.powershell, &mut report).await;
        run_all(&*self.cmd, &commands.cmd, &mut report).await;

        info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failed,
            launch_failed = report.launch_failed,
            "command run complete"
        );
        report
    }
}

async fn run_all(shell: &dyn Shell, lines: &[String], report: &mut RunReport) {
    for line in lines {
        info!(shell = shell.name(), command = %line, "Running");
        report.attempted += 1;

        match shell.run(line).await {
            Ok(status) if status.success => report.succeeded += 1,
            Ok(status) => {
                report.failed += 1;
                warn!(
                    shell = shell.name(),
                    command = %line,
                    exit_code = status.code.unwrap_or(-1),
                    "Command failed"
                );
            }
            Err(e) => {
                report.launch_failed += 1;
                error!(error = %e, "Command failed to launch");
            }
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(ExecutorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{CommandStatus, ExecutorError, Result};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every line; lines starting with "fail" exit 1, "missing" cannot launch
    struct RecordingShell {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Shell for RecordingShell {
        fn name(&self) -> &str {
            self.name
        }

        async fn run(&self, line: &str) -> Result<CommandStatus> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, line));
            if line.starts_with("missing") {
                return Err(ExecutorError::SpawnFailed(
                    self.name.to_string(),
                    line.to_string(),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                ));
            }
            if line.starts_with("fail") {
                return Ok(CommandStatus {
                    code: Some(1),
                    success: false,
                });
            }
            Ok(CommandStatus {
                code: Some(0),
                success: true,
            })
        }
    }

    fn recording_executor() -> (Executor, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let executor = Executor::with_shells(
            Box::new(RecordingShell {
                name: "ps",
                log: log.clone(),
            }),
            Box::new(RecordingShell {
                name: "cmd",
                log: log.clone(),
            }),
        );
        (executor, log)
    }

    fn set(powershell: &[&str], cmd: &[&str]) -> CommandSet {
        CommandSet {
            powershell: powershell.iter().map(|s| s.to_string()).collect(),
            cmd: cmd.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_powershell_runs_before_cmd() {
        let (executor, log) = recording_executor();
        let report = executor.execute(&set(&["a", "b"], &["c", "d"])).await;

        assert_eq!(*log.lock().unwrap(), vec!["ps:a", "ps:b", "cmd:c", "cmd:d"]);
        assert_eq!(report.attempted, 4);
        assert!(report.all_succeeded());
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_the_run() {
        let (executor, log) = recording_executor();
        let report = executor
            .execute(&set(&["fail-1", "missing-2", "ok-3"], &["fail-4", "ok-5"]))
            .await;

        assert_eq!(log.lock().unwrap().len(), 5);
        assert_eq!(
            report,
            RunReport {
                attempted: 5,
                succeeded: 2,
                failed: 2,
                launch_failed: 1,
            }
        );
        assert!(!report.all_succeeded());
    }

    #[tokio::test]
    async fn test_duplicates_run_repeatedly() {
        let (executor, log) = recording_executor();
        executor.execute(&set(&[], &["x", "x", "x"])).await;
        assert_eq!(*log.lock().unwrap(), vec!["cmd:x", "cmd:x", "cmd:x"]);
    }

    #[tokio::test]
    async fn test_empty_set_runs_nothing() {
        let (executor, log) = recording_executor();
        let report = executor.execute(&CommandSet::new()).await;

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(report, RunReport::default());
        assert!(report.all_succeeded());
    }
}
