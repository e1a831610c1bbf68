//! `rut format`

use std::io::Write;

use clap::Args;
use rut_core::FormatPolicy;
use serde::Serialize;
use tracing::debug;

use super::{Context, Outcome};
use crate::error::CliResult;
use crate::output::{write_json, OutputFormat};

#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Values to format (any punctuation is accepted).
    #[arg(required = true)]
    pub values: Vec<String>,

    /// database-match | user-entry | simple (default from config).
    #[arg(long)]
    pub policy: Option<FormatPolicy>,
}

/// One `--json` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedValue {
    pub input: String,
    pub formatted: String,
}

impl FormatCommand {
    pub fn run(&self, ctx: &Context, out: &mut dyn Write) -> CliResult<Outcome> {
        let policy = self.policy.unwrap_or(ctx.config.format.policy);
        debug!(%policy, count = self.values.len(), "Formatting values");

        let results: Vec<FormattedValue> = self
            .values
            .iter()
            .map(|input| FormattedValue {
                input: input.clone(),
                formatted: rut_core::format(input, policy),
            })
            .collect();

        match ctx.output {
            OutputFormat::Text => {
                for result in &results {
                    writeln!(out, "{}", result.formatted)?;
                }
            }
            OutputFormat::Json => write_json(out, &results)?,
        }

        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[&str], policy: Option<FormatPolicy>, output: OutputFormat) -> String {
        let cmd = FormatCommand {
            values: values.iter().map(|v| v.to_string()).collect(),
            policy,
        };
        let ctx = Context {
            output,
            ..Default::default()
        };
        let mut buf = Vec::new();
        assert_eq!(cmd.run(&ctx, &mut buf).unwrap(), Outcome::Success);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_uses_config_policy_by_default() {
        let text = run(&["159435032", "15.943.503"], None, OutputFormat::Text);
        assert_eq!(text, "15.943.503-2\n1.594.350-3\n");
    }

    #[test]
    fn test_policy_flag_wins() {
        let text = run(
            &["145678901"],
            Some(FormatPolicy::DatabaseMatchLeft),
            OutputFormat::Text,
        );
        assert_eq!(text, "14.567.890-1\n");
    }

    #[test]
    fn test_json_output() {
        let json = run(
            &["1594350"],
            Some(FormatPolicy::SimpleFixedWidth),
            OutputFormat::Json,
        );
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["input"], "1594350");
        assert_eq!(parsed[0]["formatted"], "1.594.350");
    }
}
