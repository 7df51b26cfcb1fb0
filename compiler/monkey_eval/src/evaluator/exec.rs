//! Statement and expression evaluation.

use std::io::Write;

use monkey_ir::{BlockStatement, Expression, Program, Statement};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{EvalResult, Evaluator, Interrupt};
use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::object::{Function, Object, NULL};
use crate::operators::{evaluate_index, evaluate_infix};
use crate::unary_operators::evaluate_prefix;

impl<W: Write> Evaluator<W> {
    /// Run statements in order, stopping at the first `return` or error.
    pub(super) fn eval_program(
        &mut self,
        program: &Program,
        env: &Environment,
    ) -> EvalResult<Option<Object>> {
        let mut result = None;
        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                Err(Interrupt::Return(value)) => return Ok(Some(value)),
                Err(error @ Interrupt::Error(_)) => return Err(error),
            }
        }
        Ok(result)
    }

    /// Like a program, except a `return` keeps unwinding past the block.
    pub(super) fn eval_block(
        &mut self,
        block: &BlockStatement,
        env: &Environment,
    ) -> EvalResult<Option<Object>> {
        let mut result = None;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    /// A block used as a value; one that produces nothing is `null`.
    fn eval_block_value(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        Ok(self.eval_block(block, env)?.unwrap_or(NULL))
    }

    pub(super) fn eval_statement(
        &mut self,
        statement: &Statement,
        env: &Environment,
    ) -> EvalResult<Option<Object>> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.as_str(), value);
                Ok(None)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value, env)?;
                Err(Interrupt::Return(value))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env).map(Some),
        }
    }

    pub(super) fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => self.eval_identifier(ident.as_str(), env),
            Expression::Integer(value) => Ok(Object::Integer(*value)),
            Expression::String(value) => Ok(Object::String(value.clone())),
            Expression::Boolean(value) => Ok(Object::from_native_bool(*value)),
            Expression::Prefix { op, right } => {
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_prefix(*op, &right)?)
            }
            // Right operand first.
            Expression::Infix { op, left, right } => {
                let right = self.eval_expression(right, env)?;
                let left = self.eval_expression(left, env)?;
                Ok(evaluate_infix(*op, &left, &right)?)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block_value(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block_value(alternative, env)
                } else {
                    Ok(NULL)
                }
            }
            Expression::Function(literal) => Ok(Object::Function(Function::new(
                literal.clone(),
                env.clone(),
            ))),
            Expression::Call {
                function,
                arguments,
            } => {
                let callee = self.eval_expression(function, env)?;
                let args = self.eval_expressions(arguments, env)?;
                Ok(self.apply_function(&callee, args)?)
            }
            Expression::Array(elements) => {
                let elements = self.eval_expressions(elements, env)?;
                Ok(Object::from(elements))
            }
            Expression::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(evaluate_index(&left, &index)?)
            }
        }
    }

    /// Scopes first, then builtins.
    fn eval_identifier(&self, name: &str, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        if let Some(builtin) = self.builtins.get(name) {
            return Ok(Object::Builtin(builtin));
        }
        trace!(name, "unbound identifier");
        Err(RuntimeError::IdentifierNotFound(name.to_string()).into())
    }

    /// Left to right, stopping at the first error.
    fn eval_expressions(&mut self, exprs: &[Expression], env: &Environment) -> EvalResult<Vec<Object>> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }
}
