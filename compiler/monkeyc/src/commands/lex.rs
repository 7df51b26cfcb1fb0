//! The `lex` command: dump the token stream.

use std::io::Write;

use monkey_lexer::lex;

use super::{read_file, CliError, Status};

pub fn lex_file(path: &str) -> Result<Status, CliError> {
    let source = read_file(path)?;
    lex_source(&source, &mut std::io::stdout().lock())
}

/// Write one token per line, `Eof` included.
pub fn lex_source(source: &str, out: &mut impl Write) -> Result<Status, CliError> {
    for token in lex(source) {
        writeln!(out, "{token}")?;
    }
    Ok(Status::Success)
}
