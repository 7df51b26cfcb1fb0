//! Runtime values.
//!
//! `Display` is the user-facing rendering printed by the REPL.

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, FunctionLiteral, Identifier};

use crate::builtins::BuiltinFn;
use crate::environment::Environment;
use crate::errors::RuntimeError;

pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

/// A Monkey value.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Integer(i64),
    String(String),
    /// Only ever `TRUE` or `FALSE`; build through [`Object::from_native_bool`].
    Boolean(bool),
    Null,
    /// A `return` on its way out of nested blocks.
    ReturnValue(Box<Object>),
    Error(RuntimeError),
    Function(Function),
    Builtin(Builtin),
    Array(Rc<[Object]>),
}

impl Object {
    #[inline]
    pub const fn from_native_bool(value: bool) -> Object {
        if value {
            TRUE
        } else {
            FALSE
        }
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    pub fn type_name(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::String(_) => ObjectType::String,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Null => ObjectType::Null,
            Object::ReturnValue(_) => ObjectType::ReturnValue,
            Object::Error(_) => ObjectType::Error,
            Object::Function(_) => ObjectType::Function,
            Object::Builtin(_) => ObjectType::Builtin,
            Object::Array(_) => ObjectType::Array,
        }
    }
}

impl From<Vec<Object>> for Object {
    fn from(elements: Vec<Object>) -> Self {
        Object::Array(elements.into())
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::String(value) => f.write_str(value),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Null => f.write_str("null"),
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(error) => write!(f, "Error: {error}"),
            Object::Function(function) => write!(f, "{function}"),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Runtime type tag, as it appears in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
    String,
    Builtin,
    Array,
}

impl ObjectType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::ReturnValue => "RETURN_VALUE",
            ObjectType::Error => "ERROR",
            ObjectType::Function => "FUNCTION",
            ObjectType::String => "STRING",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Array => "ARRAY",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closure: a function literal plus the environment it was created in.
///
/// The literal is shared with the syntax tree, so creating a closure never
/// copies the body.
#[derive(Clone)]
pub struct Function {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl Function {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        Function { literal, env }
    }

    pub fn parameters(&self) -> &[Identifier] {
        &self.literal.parameters
    }

    pub fn body(&self) -> &BlockStatement {
        &self.literal.body
    }
}

/// Identity: the same literal closed over the same environment.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.literal, &other.literal) && self.env.ptr_eq(&other.env)
    }
}

// The environment is left out: a function bound in its own defining scope
// would otherwise print forever.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.literal.parameters)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, parameter) in self.parameters().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ") {{\n{}\n}}", self.body())
    }
}

/// A native function reachable by name when no binding shadows it.
#[derive(Copy, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}
