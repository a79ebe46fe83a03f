mod config;
mod executor;
mod installer;
mod loader;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use executor::{Executor, ExecutorConfig};
use installer::{Installer, InstallerConfig};
use loader::{Loader, LoaderConfig};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::fmt;

/// Boot-time command runner
#[derive(Debug, Parser)]
#[command(name = "onboot", version)]
#[command(about = "Run the raw_ps / raw_cmd commands found in *.yml files under a directory")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    action: Option<Action>,

    /// Directory scanned recursively for *.yml command files
    path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Register a startup task that runs `onboot <PATH>`
    Install {
        /// Directory the startup task will scan
        path: PathBuf,

        /// Run the task under the SYSTEM account
        #[arg(long)]
        system: bool,

        /// Scheduled task name
        #[arg(long)]
        task_name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    config::load_dotenv();

    fmt()
        .with_max_level(config::parse_env_var("ONBOOT_LOG_LEVEL", Level::INFO))
        .with_target(false)
        .init();

    match parse_invocation(std::env::args_os()) {
        Invocation::Install {
            path,
            system,
            task_name,
        } => install(&path, system, task_name).await,
        Invocation::Run(path) => run(&path).await,
        Invocation::Display(e) => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        Invocation::Usage => {
            print_usage();
            ExitCode::SUCCESS
        }
    }
}

/// What a command line asks for
#[derive(Debug)]
enum Invocation {
    Install {
        path: PathBuf,
        system: bool,
        task_name: Option<String>,
    },
    Run(PathBuf),
    /// `--help` / `--version` text
    Display(clap::Error),
    /// Anything unrecognized; prints usage and still exits 0
    Usage,
}

fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Invocation::Display(e);
        }
        Err(_) => return Invocation::Usage,
    };

    match (cli.action, cli.path) {
        (
            Some(Action::Install {
                path,
                system,
                task_name,
            }),
            _,
        ) => Invocation::Install {
            path,
            system,
            task_name,
        },
        (None, Some(path)) => Invocation::Run(path),
        (None, None) => Invocation::Usage,
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
}

async fn install(path: &Path, system: bool, task_name: Option<String>) -> ExitCode {
    let mut config = InstallerConfig::from_env();
    config.run_as_system |= system;
    if let Some(task_name) = task_name {
        config.task_name = task_name;
    }

    info!(task = %config.task_name, path = %path.display(), "Installing startup task...");

    match Installer::new(config).install(path).await {
        Ok(()) => {
            println!("Task Scheduler installation complete.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Installation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &Path) -> ExitCode {
    let commands = match Loader::new(LoaderConfig::default()).load(path) {
        Ok(commands) => commands,
        Err(e) => {
            error!(error = %e, "Error loading commands");
            return ExitCode::FAILURE;
        }
    };
    info!(path = %path.display(), commands = commands.len(), "Commands loaded");

    let report = Executor::new(ExecutorConfig::from_env())
        .execute(&commands)
        .await;

    if !report.all_succeeded() {
        warn!(
            failed = report.failed + report.launch_failed,
            attempted = report.attempted,
            "Some commands failed"
        );
    }
    ExitCode::SUCCESS
}
