use crate::config::cli::Cli;
use crate::config::{AppConfig, FromEnv};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::time::format_duration;
use chrono::{DateTime, Utc};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

/// Logs "program finished" with start, end and duration when dropped.
pub struct ProgramTimer {
    started: DateTime<Utc>,
}

impl ProgramTimer {
    pub fn start() -> Self {
        Self {
            started: Utc::now(),
        }
    }

    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }
}

impl Drop for ProgramTimer {
    fn drop(&mut self) {
        // Wall clock may step backwards; the end never precedes the start.
        let ended = Utc::now().max(self.started);
        tracing::info!(
            programStart = %self.started.to_rfc3339(),
            programEnd = %ended.to_rfc3339(),
            programDuration = %format_duration(ended - self.started),
            "program finished"
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran.
    Completed,
    /// Help or version text was printed instead of running.
    Displayed,
}

/// Parses `args`, loads configuration and runs the requested command.
pub fn run<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(Outcome::Displayed);
        }
        Err(e) => return Err(e.into()),
    };

    let config = AppConfig::from_env();
    tracing::debug!(config = ?config, "configuration loaded");

    tracing::info!(arguments = %cli.arguments(), "running command");

    Ok(Outcome::Completed)
}

/// Runs the program inside a [`ProgramTimer`] and maps the result to an exit status.
/// Errors are logged here and never propagate further.
pub fn execute<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let _timer = ProgramTimer::start();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if let ScaffoldError::Usage(usage) = &e {
                let _ = usage.print();
            }
            tracing::error!(error = %e.summary(), "error running package");
            ExitCode::from(e.exit_code())
        }
    }
}
