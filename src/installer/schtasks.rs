// Task Scheduler registration through schtasks.exe

use crate::installer::config::InstallerConfig;
use crate::installer::error::{InstallError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Creates (or replaces) the startup task
pub struct Installer {
    config: InstallerConfig,
}

impl Installer {
    pub fn new(config: InstallerConfig) -> Self {
        Self { config }
    }

    /// Register a task that runs `<this exe> <target>` at system start
    ///
    /// `target` is made absolute first: the task does not start in the
    /// current directory.
    pub async fn install(&self, target: &Path) -> Result<()> {
        let exe = std::env::current_exe().map_err(InstallError::ExecutablePath)?;
        let target = std::path::absolute(target)
            .map_err(|e| InstallError::TargetPath(target.to_path_buf(), e))?;

        let args = self.create_args(&exe, &target);
        debug!(program = %self.config.schtasks_program, args = ?args, "invoking schtasks");

        let status = Command::new(&self.config.schtasks_program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(InstallError::SpawnFailed)?;

        if !status.success() {
            return Err(InstallError::SchtasksFailed(status.code()));
        }

        info!(
            task = %self.config.task_name,
            exe = %exe.display(),
            target = %target.display(),
            system = self.config.run_as_system,
            "startup task registered"
        );
        Ok(())
    }

    /// `schtasks` arguments for an on-start, highest-privilege task
    pub fn create_args(&self, exe: &Path, target: &Path) -> Vec<String> {
        let mut args = vec![
            "/Create".to_string(),
            "/TN".to_string(),
            self.config.task_name.clone(),
            "/TR".to_string(),
            task_command(exe, target),
            "/SC".to_string(),
            "ONSTART".to_string(),
            "/RL".to_string(),
            "HIGHEST".to_string(),
        ];
        if self.config.run_as_system {
            args.push("/RU".to_string());
            args.push("SYSTEM".to_string());
        }
        args.push("/F".to_string());
        args
    }
}

/// The `/TR` value: quoted executable followed by the quoted directory
pub fn task_command(exe: &Path, target: &Path) -> String {
    format!("\"{}\" \"{}\"", exe.display(), unescaped_target(target))
}

// A trailing backslash would escape the closing quote.
fn unescaped_target(path: &Path) -> String {
    let text = path.to_string_lossy();
    let trimmed = text.trim_end_matches(['\\', '/']);
    if trimmed.is_empty() {
        text.into_owned()
    } else if trimmed.ends_with(':') {
        format!("{trimmed}\\\\")
    } else {
        trimmed.to_string()
    }
}
