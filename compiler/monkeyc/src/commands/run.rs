//! The `run` command: parse and evaluate a Monkey source file.

use std::io::Write;

use monkey_eval::{EvalConfig, Environment, Evaluator, Object};
use monkey_parse::parse;
use tracing::debug;

use super::{read_file, write_parse_errors, CliError, Status};

/// Run a file with the result and `puts` output on stdout and problems on stderr.
pub fn run_file(path: &str, config: EvalConfig) -> Result<Status, CliError> {
    let source = read_file(path)?;
    run_source(
        &source,
        config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Parse and evaluate `source` in a fresh root scope.
///
/// Diagnostics abort before evaluation. A runtime error is written to `err`
/// as `Error: <message>`. Any other result is written to `out` unless it is
/// `null`.
pub fn run_source(
    source: &str,
    config: EvalConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let output = parse(source);
    if output.has_errors() {
        debug!(count = output.errors.len(), "parse failed");
        write_parse_errors(err, &output.errors)?;
        return Ok(Status::Failure);
    }

    let result = {
        let mut evaluator = Evaluator::with_output(&mut *out).with_config(config);
        let result = evaluator.eval(&output.program, &Environment::new_root());
        evaluator.output_mut().flush()?;
        result
    };

    match result {
        Some(error @ Object::Error(_)) => {
            writeln!(err, "{error}")?;
            Ok(Status::Failure)
        }
        Some(Object::Null) | None => Ok(Status::Success),
        Some(value) => {
            writeln!(out, "{value}")?;
            Ok(Status::Success)
        }
    }
}
