//! Command handlers for the `monkey` CLI.
//!
//! Each submodule implements one command. Handlers write to caller-supplied
//! sinks and return a [`Status`]; only `main` touches the process exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use monkey_parse::ParseError;

use crate::config::ConfigError;

mod lex;
mod parse;
mod run;

pub use lex::{lex_file, lex_source};
pub use parse::{parse_file, parse_source};
pub use run::{run_file, run_source};

/// Driver failures that happen outside the language itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

/// Outcome of a command that ran to completion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The program had diagnostics or ended in a runtime error.
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Read a source file, mapping I/O failures to user-facing messages.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::NotFound(path.to_string()),
        io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path.to_string()),
        io::ErrorKind::InvalidData => CliError::InvalidUtf8(path.to_string()),
        _ => CliError::Read {
            path: path.to_string(),
            source: e,
        },
    })
}

/// Print parse diagnostics, one per line, tab-indented.
pub fn write_parse_errors(out: &mut impl Write, errors: &[ParseError]) -> io::Result<()> {
    for error in errors {
        writeln!(out, "\t{error}")?;
    }
    Ok(())
}
