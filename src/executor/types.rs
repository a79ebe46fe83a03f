// Data types for Executor module

/// Exit state of one finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Process exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    pub success: bool,
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

/// Counters for one execution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Commands handed to an interpreter
    pub attempted: usize,
    pub succeeded: usize,
    /// Commands that ran and exited non-zero
    pub failed: usize,
    /// Commands whose interpreter could not be started
    pub launch_failed: usize,
}

impl RunReport {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.attempted
    }
}
