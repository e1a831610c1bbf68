//! # rut-cli: Command-Line Surface
//!
//! Batch formatting and re-validation of Chilean RUTs over `rut-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap) ───────────────────────────────────────────► │
//! │                                                                         │
//! │  2. Load RutConfig ───────────────────────────────────────────────────► │
//! │     • defaults → rut.toml → RUT_* env                                   │
//! │     • failure: message on stderr, exit 2                                │
//! │                                                                         │
//! │  3. Initialize Tracing ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default from [logging] filter, RUST_LOG overrides                 │
//! │                                                                         │
//! │  4. Run the command ──────────────────────────────────────────────────► │
//! │     • flags override config values                                      │
//! │     • exit 0 (ok), 1 (invalid values), 2 (error)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use commands::{Cli, Commands, Context, Outcome};
pub use config::RutConfig;
pub use error::{CliError, CliResult};

/// Exit status for a [`CliError`].
const EXIT_ERROR: u8 = 2;

/// Runs the `rut` binary.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match RutConfig::load(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    init_tracing(&config.logging.filter);
    debug!(
        policy = %config.format.policy,
        rule = %config.validation.rule,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.execute(config, &mut out) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rut_cli=trace` - Trace the CLI only
/// - Without `RUST_LOG`, `default_filter` (the `[logging] filter` value) applies
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
