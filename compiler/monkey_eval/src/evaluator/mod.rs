//! The evaluator.
//!
//! Internally every production returns `Result<_, Interrupt>` so that both
//! `return` and runtime errors unwind with `?`. Only [`Evaluator::eval`]
//! turns an interrupt back into a value, as `Object::ReturnValue` or
//! `Object::Error`.

mod exec;
mod function_call;

use std::io::{self, Write};

use monkey_ir::{BlockStatement, Expression, Program, Statement};
use tracing::debug;

use crate::builtins::Builtins;
use crate::config::EvalConfig;
use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::object::Object;

/// Why evaluation stopped short of a value.
#[derive(Debug)]
enum Interrupt {
    /// A `return` statement, unwinding to the nearest function or program.
    Return(Object),
    /// A runtime error, unwinding all the way out.
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    #[inline]
    fn from(error: RuntimeError) -> Self {
        Interrupt::Error(error)
    }
}

type EvalResult<T = Object> = Result<T, Interrupt>;

/// Any syntax node the evaluator accepts.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Node::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}

/// Tree-walking evaluator.
///
/// Holds no program state of its own: bindings live in the [`Environment`]
/// passed to each call, so one evaluator can run many programs. `puts`
/// writes to `W`.
pub struct Evaluator<W = io::Stdout> {
    config: EvalConfig,
    builtins: Builtins,
    output: W,
    /// User-function calls currently in progress.
    depth: usize,
}

impl Evaluator {
    /// An evaluator printing to stdout, with default limits.
    pub fn new() -> Self {
        Evaluator::with_output(io::stdout())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Evaluator<W> {
    pub fn with_output(output: W) -> Self {
        Evaluator {
            config: EvalConfig::default(),
            builtins: Builtins::new(),
            output,
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluate `node` in `env`.
    ///
    /// A program yields the value of its last statement, unwrapping a
    /// top-level `return`. Any other node leaves a `return` wrapped as
    /// `Object::ReturnValue`. Errors come back as `Object::Error`. `None`
    /// means the node produced no value, as a `let` statement does.
    pub fn eval<'a>(&mut self, node: impl Into<Node<'a>>, env: &Environment) -> Option<Object> {
        let result = match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Expression(expr) => self.eval_expression(expr, env).map(Some),
        };
        match result {
            Ok(value) => value,
            Err(Interrupt::Return(value)) => Some(Object::ReturnValue(Box::new(value))),
            Err(Interrupt::Error(error)) => {
                debug!(%error, "runtime error");
                Some(Object::Error(error))
            }
        }
    }
}
