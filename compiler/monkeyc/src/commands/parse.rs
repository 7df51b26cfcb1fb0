//! The `parse` command: print the canonical rendering of each statement.

use std::io::Write;

use monkey_parse::parse;

use super::{read_file, write_parse_errors, CliError, Status};

pub fn parse_file(path: &str) -> Result<Status, CliError> {
    let source = read_file(path)?;
    parse_source(&source, &mut std::io::stdout().lock())
}

/// Write one statement per line, or the diagnostics if there are any.
pub fn parse_source(source: &str, out: &mut impl Write) -> Result<Status, CliError> {
    let output = parse(source);
    if output.has_errors() {
        write_parse_errors(out, &output.errors)?;
        return Ok(Status::Failure);
    }
    for statement in &output.program.statements {
        writeln!(out, "{statement}")?;
    }
    Ok(Status::Success)
}
