//! `rut check-digit`

use std::io::Write;

use clap::Args;
use rut_core::{checksum::MAX_BODY_LEN, clean, CheckDigit, Rut};
use serde::Serialize;

use super::{Context, Outcome};
use crate::error::{CliError, CliResult};
use crate::output::{write_json, OutputFormat};

#[derive(Debug, Args)]
pub struct CheckDigitCommand {
    /// Body digits, with or without thousands separators.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDigitResult {
    pub body: u32,
    pub check_digit: CheckDigit,
    pub rut: Rut,
}

impl CheckDigitCommand {
    pub fn run(&self, ctx: &Context, out: &mut dyn Write) -> CliResult<Outcome> {
        let rut = parse_body(&self.body)?;
        let result = CheckDigitResult {
            body: rut.body(),
            check_digit: rut.check_digit(),
            rut,
        };

        match ctx.output {
            OutputFormat::Text => writeln!(out, "{}", result.rut)?,
            OutputFormat::Json => write_json(out, &result)?,
        }

        Ok(Outcome::Success)
    }
}

fn parse_body(input: &str) -> CliResult<Rut> {
    let digits = clean(input);
    let invalid = || CliError::InvalidBody(input.to_string());

    if digits.is_empty()
        || digits.len() > MAX_BODY_LEN
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let body: u32 = digits.parse().map_err(|_| invalid())?;
    Rut::from_body(body).map_err(|_| invalid())
}
