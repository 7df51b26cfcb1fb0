//! Native functions.
//!
//! The registry is built once per evaluator and consulted only after an
//! identifier misses in every scope, so user bindings shadow builtins.

use std::io::Write;

use rustc_hash::FxHashMap;

use crate::errors::RuntimeError;
use crate::object::{Builtin, Object, NULL};

/// Signature of a native function: evaluated arguments plus the output sink.
pub type BuiltinFn = fn(&[Object], &mut dyn Write) -> Result<Object, RuntimeError>;

/// Immutable name to builtin map.
#[derive(Clone, Debug)]
pub struct Builtins {
    table: FxHashMap<&'static str, Builtin>,
}

impl Builtins {
    /// The standard library: `len`, `first`, `last`, `rest`, `push`, `puts`.
    pub fn new() -> Self {
        let entries: [(&'static str, BuiltinFn); 6] = [
            ("len", len),
            ("first", first),
            ("last", last),
            ("rest", rest),
            ("push", push),
            ("puts", puts),
        ];
        let table = entries
            .into_iter()
            .map(|(name, func)| (name, Builtin { name, func }))
            .collect();
        Builtins { table }
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.table.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

fn check_arity(args: &[Object], want: usize) -> Result<(), RuntimeError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::wrong_argument_count(args.len(), want))
    }
}

fn expect_array<'a>(builtin: &'static str, arg: &'a Object) -> Result<&'a [Object], RuntimeError> {
    match arg {
        Object::Array(elements) => Ok(&elements[..]),
        other => Err(RuntimeError::ExpectedArray {
            builtin,
            got: other.type_name(),
        }),
    }
}

fn count(n: usize) -> Object {
    Object::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Byte length of a string, or element count of an array.
fn len(args: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
    check_arity(args, 1)?;
    match &args[0] {
        Object::String(value) => Ok(count(value.len())),
        Object::Array(elements) => Ok(count(elements.len())),
        other => Err(RuntimeError::UnsupportedArgument {
            builtin: "len",
            got: other.type_name(),
        }),
    }
}

fn first(args: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
    check_arity(args, 1)?;
    let elements = expect_array("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(NULL))
}

fn last(args: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
    check_arity(args, 1)?;
    let elements = expect_array("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(NULL))
}

/// Every element but the first, as a new array; `null` for an empty array.
fn rest(args: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
    check_arity(args, 1)?;
    let elements = expect_array("rest", &args[0])?;
    match elements.split_first() {
        Some((_, tail)) => Ok(Object::Array(tail.into())),
        None => Ok(NULL),
    }
}

/// A new array with `value` appended; the argument is left as it was.
fn push(args: &[Object], _: &mut dyn Write) -> Result<Object, RuntimeError> {
    check_arity(args, 2)?;
    let elements = expect_array("push", &args[0])?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend_from_slice(elements);
    pushed.push(args[1].clone());
    Ok(Object::from(pushed))
}

/// Print each argument on its own line.
fn puts(args: &[Object], out: &mut dyn Write) -> Result<Object, RuntimeError> {
    for arg in args {
        writeln!(out, "{arg}").map_err(|err| RuntimeError::Output(err.to_string()))?;
    }
    Ok(NULL)
}
