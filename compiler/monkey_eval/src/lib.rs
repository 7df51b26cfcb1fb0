//! Tree-walking evaluator for Monkey.
//!
//! Reduces a parsed [`Program`](monkey_ir::Program) to an [`Object`] under an
//! [`Environment`]. Runtime errors are values of the language: they surface
//! as [`Object::Error`] and are never caught inside it.
//!
//! ```text
//! let env = Environment::new_root();
//! let mut evaluator = Evaluator::new();
//! let result = evaluator.eval(&program, &env);
//! ```

mod builtins;
mod config;
mod environment;
mod errors;
mod evaluator;
mod object;
mod operators;
mod unary_operators;

pub use builtins::{BuiltinFn, Builtins};
pub use config::EvalConfig;
pub use environment::Environment;
pub use errors::RuntimeError;
pub use evaluator::{Evaluator, Node};
pub use object::{Builtin, Function, Object, ObjectType, FALSE, NULL, TRUE};
pub use operators::{evaluate_index, evaluate_infix};
pub use unary_operators::evaluate_prefix;

#[cfg(test)]
mod tests;
