//! # CLI Commands
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rut format      <VALUES>... [--policy P]   print formatted values      │
//! │  rut validate    <VALUES>... [--rule R]     canonical form or reason    │
//! │  rut check-digit <BODY>                     print BODY-C                │
//! │  rut check-file  <PATH>      [--rule R]     validate a column export    │
//! │                                                                         │
//! │  global: --json, --config <PATH>                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command writes to the `Write` it is handed, never to stdout
//! directly.

mod check_digit;
mod check_file;
mod format;
mod validate;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

pub use check_digit::{CheckDigitCommand, CheckDigitResult};
pub use check_file::{check_contents, CheckFileCommand, FileReport, LineFailure};
pub use format::{FormatCommand, FormattedValue};
pub use validate::ValidateCommand;

use crate::config::RutConfig;
use crate::error::CliResult;
use crate::output::OutputFormat;

/// Format and validate Chilean RUTs.
#[derive(Debug, Parser)]
#[command(name = "rut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to rut.toml in the platform config directory).
    #[arg(long, global = true, env = "RUT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format values with one of the three formatting policies.
    Format(FormatCommand),

    /// Validate values and print their canonical form.
    Validate(ValidateCommand),

    /// Compute the check digit for a body.
    CheckDigit(CheckDigitCommand),

    /// Validate the first column of every line in a file.
    CheckFile(CheckFileCommand),
}

/// What a command runs against once flags are parsed.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: RutConfig,
    pub output: OutputFormat,
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything checked out.
    Success,
    /// At least one value failed validation.
    Invalid,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(1),
        }
    }
}

impl Cli {
    /// Runs the parsed command against `config`.
    pub fn execute(&self, config: RutConfig, out: &mut dyn Write) -> CliResult<Outcome> {
        let ctx = Context {
            config,
            output: OutputFormat::from_json_flag(self.json),
        };

        match &self.command {
            Commands::Format(cmd) => cmd.run(&ctx, out),
            Commands::Validate(cmd) => cmd.run(&ctx, out),
            Commands::CheckDigit(cmd) => cmd.run(&ctx, out),
            Commands::CheckFile(cmd) => cmd.run(&ctx, out),
        }
    }
}
