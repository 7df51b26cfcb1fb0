//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use monkey_eval::{EvalConfig, Environment, Evaluator};
use monkey_parse::parse;
use tracing::trace;

use crate::commands::write_parse_errors;

pub const PROMPT: &str = ">> ";

/// One REPL session. Bindings persist across lines and across calls to
/// [`Repl::run`].
pub struct Repl {
    env: Environment,
    config: EvalConfig,
}

impl Repl {
    pub fn new(config: EvalConfig) -> Self {
        Repl {
            env: Environment::new_root(),
            config,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Read lines from `input` until end of input, evaluating each one.
    ///
    /// A line with diagnostics prints them tab-indented and is skipped.
    /// Otherwise the value's rendering is printed, or nothing for a line
    /// without a value such as a lone `let`.
    pub fn run(&mut self, mut input: impl BufRead, output: impl Write) -> io::Result<()> {
        let mut evaluator = Evaluator::with_output(output).with_config(self.config);
        let mut line = String::new();

        loop {
            let out = evaluator.output_mut();
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            trace!(line = line.trim_end(), "repl input");

            let parsed = parse(&line);
            if parsed.has_errors() {
                write_parse_errors(evaluator.output_mut(), &parsed.errors)?;
                continue;
            }

            if let Some(value) = evaluator.eval(&parsed.program, &self.env) {
                writeln!(evaluator.output_mut(), "{value}")?;
            }
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Repl::new(EvalConfig::default())
    }
}
