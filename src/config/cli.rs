use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

/// Package version baked in at build time, `local` when unavailable.
pub const VERSION: &str = match option_env!("CARGO_PKG_VERSION") {
    Some(version) => version,
    None => "local",
};

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "person-scaffold")]
#[command(about = "Application scaffold for person records")]
#[command(version = VERSION)]
#[command(subcommand_required = true)]
#[command(disable_help_subcommand = true, disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Every token of the usage grammar mapped to its parsed value. Help and version
    /// exit during parsing, so a parsed `Cli` reports both as `false`.
    pub fn arguments(&self) -> Value {
        json!({
            "command": self.command,
            "--help": false,
            "--version": self.version.unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Subcommand)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Load configuration and run the command
    Run,
}
