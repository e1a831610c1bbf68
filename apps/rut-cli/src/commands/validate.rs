//! `rut validate`

use std::io::Write;

use clap::Args;
use rut_core::{BodyRule, ValidationReport};
use tracing::info;

use super::{Context, Outcome};
use crate::error::CliResult;
use crate::output::{write_json, OutputFormat};

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Values to validate, formatted or raw.
    #[arg(required = true)]
    pub values: Vec<String>,

    /// lenient | full-width | server (default from config).
    #[arg(long)]
    pub rule: Option<BodyRule>,
}

impl ValidateCommand {
    pub fn run(&self, ctx: &Context, out: &mut dyn Write) -> CliResult<Outcome> {
        let rule = self.rule.unwrap_or(ctx.config.validation.rule);

        let reports: Vec<ValidationReport> = self
            .values
            .iter()
            .map(|input| ValidationReport::check(input, rule))
            .collect();
        let invalid = reports.iter().filter(|r| !r.valid).count();

        info!(%rule, checked = reports.len(), invalid, "Validated values");

        match ctx.output {
            OutputFormat::Text => {
                for report in &reports {
                    write_report_line(out, report)?;
                }
            }
            OutputFormat::Json => write_json(out, &reports)?,
        }

        Ok(if invalid == 0 {
            Outcome::Success
        } else {
            Outcome::Invalid
        })
    }
}

fn write_report_line(out: &mut dyn Write, report: &ValidationReport) -> CliResult<()> {
    match (&report.canonical, &report.reason) {
        (Some(canonical), _) => writeln!(out, "{}  valid", canonical)?,
        (None, Some(reason)) => writeln!(out, "{}  invalid: {}", report.input, reason)?,
        (None, None) => writeln!(out, "{}  invalid", report.input)?,
    }
    Ok(())
}
