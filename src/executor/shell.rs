// Shell trait

use crate::executor::{CommandStatus, Result};
use async_trait::async_trait;

/// An interpreter strategy that runs one command line to completion
#[async_trait]
pub trait Shell: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Run `line` and wait for it to exit
    ///
    /// `Err` means the interpreter could not be launched; a non-zero exit is
    /// reported through `CommandStatus`.
    async fn run(&self, line: &str) -> Result<CommandStatus>;
}
