//! # `rut` Entry Point
//!
//! Argument parsing, config loading and logging setup live in `lib.rs` so
//! the command layer stays testable without spawning a process.

use std::process::ExitCode;

fn main() -> ExitCode {
    rut_cli::run()
}
