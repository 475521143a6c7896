use clap::Parser;
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::registry::Command;

/// Gator: run a registered command against your saved session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    /// Config file to use instead of ~/.gatorconfig.json
    #[arg(long, value_name = "PATH", env = "GATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command to run
    #[arg(value_name = "COMMAND", add = ArgValueCompleter::new(list_commands))]
    pub command: String,

    /// Arguments passed to the command
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// The parsed invocation handed to the registry
    #[must_use]
    pub fn to_command(&self) -> Command {
        Command::new(self.command.clone(), self.args.clone())
    }
}

/// List registered command names for completion of the COMMAND argument
///
/// Filters names by the provided prefix
#[must_use]
pub fn list_commands(current: &OsStr) -> Vec<CompletionCandidate> {
    let prefix = current.to_string_lossy();
    crate::commands::registry()
        .names()
        .into_iter()
        .filter(|name| name.starts_with(prefix.as_ref()))
        .map(CompletionCandidate::new)
        .collect()
}
