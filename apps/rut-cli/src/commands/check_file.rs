//! `rut check-file`
//!
//! Re-validates a column export (one identifier per line, first cell of a
//! comma or semicolon separated row). Used to audit stored records against
//! the server-side rule.
//!
//! ```text
//! rut;nombre                 ◄── header: first cell has no digits, skipped
//! 15.943.503-2;Ana           ◄── valid
//! 15943503-1;Luis            ◄── line 3: check digit mismatch
//!                            ◄── blank, ignored
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rut_core::{BodyRule, ValidationReport};
use serde::Serialize;
use tracing::{debug, info};

use super::{Context, Outcome};
use crate::error::{CliError, CliResult};
use crate::output::{write_json, OutputFormat};

#[derive(Debug, Args)]
pub struct CheckFileCommand {
    /// File to check.
    pub path: PathBuf,

    /// lenient | full-width | server (default from config).
    #[arg(long)]
    pub rule: Option<BodyRule>,
}

/// A line whose identifier failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineFailure {
    /// 1-based line number.
    pub line: usize,
    pub input: String,
    pub reason: String,
}

/// Summary of one checked file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub checked: usize,
    pub valid: usize,
    pub skipped_header: bool,
    pub failures: Vec<LineFailure>,
}

impl FileReport {
    pub fn invalid(&self) -> usize {
        self.failures.len()
    }
}

/// Checks every non-blank line of `contents`.
pub fn check_contents(contents: &str, rule: BodyRule) -> FileReport {
    let mut report = FileReport::default();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let cell = first_cell(line);
        if idx == 0 && !cell.chars().any(|c| c.is_ascii_digit()) {
            debug!(header = %cell, "Skipping header line");
            report.skipped_header = true;
            continue;
        }

        report.checked += 1;
        let checked = ValidationReport::check(cell, rule);
        if checked.valid {
            report.valid += 1;
        } else {
            report.failures.push(LineFailure {
                line: idx + 1,
                input: cell.to_string(),
                reason: checked.reason.unwrap_or_default(),
            });
        }
    }

    report
}

fn first_cell(line: &str) -> &str {
    line.trim_start_matches('\u{feff}')
        .split([',', ';'])
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches('"')
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFileReport<'a> {
    path: String,
    #[serde(flatten)]
    report: &'a FileReport,
    invalid: usize,
}

impl CheckFileCommand {
    pub fn run(&self, ctx: &Context, out: &mut dyn Write) -> CliResult<Outcome> {
        let rule = self.rule.unwrap_or(ctx.config.validation.rule);
        let contents = std::fs::read_to_string(&self.path).map_err(|source| CliError::Read {
            path: self.path.clone(),
            source,
        })?;

        let report = check_contents(&contents, rule);
        info!(
            path = %self.path.display(),
            %rule,
            checked = report.checked,
            invalid = report.invalid(),
            "Checked file"
        );

        match ctx.output {
            OutputFormat::Text => {
                for failure in &report.failures {
                    writeln!(
                        out,
                        "line {}: {}: {}",
                        failure.line, failure.input, failure.reason
                    )?;
                }
                writeln!(
                    out,
                    "{}: {} checked, {} valid, {} invalid",
                    self.path.display(),
                    report.checked,
                    report.valid,
                    report.invalid()
                )?;
            }
            OutputFormat::Json => write_json(
                out,
                &JsonFileReport {
                    path: self.path.display().to_string(),
                    report: &report,
                    invalid: report.invalid(),
                },
            )?,
        }

        Ok(if report.failures.is_empty() {
            Outcome::Success
        } else {
            Outcome::Invalid
        })
    }
}
