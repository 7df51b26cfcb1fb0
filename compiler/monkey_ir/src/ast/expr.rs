//! Expression Types
//!
//! Children are boxed: the tree is built once by the parser and only read
//! afterwards. Function literals are shared through `Rc` so that a closure
//! created at runtime points at the same body the tree owns.
//!
//! Nesting depth is bounded only by the input, so dropping is iterative and
//! rendering runs under [`ensure_sufficient_stack`].

use std::fmt;
use std::mem;
use std::rc::Rc;

use monkey_stack::ensure_sufficient_stack;

use super::operators::{InfixOp, PrefixOp};
use super::{BlockStatement, Identifier, Statement};

/// Expression variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    // ===== Literals =====

    /// Variable reference
    Identifier(Identifier),

    /// Integer literal: 42
    Integer(i64),

    /// String literal: "hello"
    String(String),

    /// Boolean literal: true, false
    Boolean(bool),

    // ===== Operators =====

    /// Prefix operation: op right
    Prefix {
        op: PrefixOp,
        right: Box<Expression>,
    },

    /// Infix operation: left op right
    Infix {
        op: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    // ===== Control flow =====

    /// Conditional: if (condition) { ... } else { ... }
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    // ===== Functions and collections =====

    /// Function literal: fn(x, y) { ... }
    Function(Rc<FunctionLiteral>),

    /// Function application: callee(args...)
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },

    /// Array literal: [a, b, c]
    Array(Vec<Expression>),

    /// Index access: left[index]
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn prefix(op: PrefixOp, right: Expression) -> Self {
        Expression::Prefix {
            op,
            right: Box::new(right),
        }
    }

    pub fn infix(op: InfixOp, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            function: Box::new(function),
            arguments,
        }
    }

    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.render(f))
    }
}

impl Expression {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::String(value) => f.write_str(value),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::Prefix { op, right } => write!(f, "({op}{right})"),
            Expression::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            Expression::Function(literal) => write!(f, "{literal}"),
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments, ",")?;
                f.write_str(")")
            }
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_joined(f, elements, ", ")?;
                f.write_str("]")
            }
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        // Each popped node has its children moved out before it drops, so
        // its own `drop` finds only leaves.
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Expression {
    /// Move every direct child expression into `out`, leaving leaves behind.
    fn take_children(&mut self, out: &mut Vec<Expression>) {
        match self {
            Expression::Identifier(_)
            | Expression::Integer(_)
            | Expression::String(_)
            | Expression::Boolean(_) => {}
            Expression::Prefix { right, .. } => out.push(take(right)),
            Expression::Infix { left, right, .. } => {
                out.push(take(left));
                out.push(take(right));
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                out.push(take(condition));
                drain_block(consequence, out);
                if let Some(alternative) = alternative {
                    drain_block(alternative, out);
                }
            }
            // A literal still shared with a closure is released by whichever
            // owner goes last.
            Expression::Function(literal) => {
                if let Some(literal) = Rc::get_mut(literal) {
                    drain_block(&mut literal.body, out);
                }
            }
            Expression::Call {
                function,
                arguments,
            } => {
                out.push(take(function));
                out.append(arguments);
            }
            Expression::Array(elements) => out.append(elements),
            Expression::Index { left, index } => {
                out.push(take(left));
                out.push(take(index));
            }
        }
    }
}

fn take(expr: &mut Expression) -> Expression {
    mem::replace(expr, Expression::Boolean(false))
}

fn drain_block(block: &mut BlockStatement, out: &mut Vec<Expression>) {
    out.extend(block.statements.drain(..).map(|statement| match statement {
        Statement::Let { value, .. } | Statement::Return(value) | Statement::Expression(value) => {
            value
        }
    }));
}

/// Function literal: ordered parameters and a body block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl FunctionLiteral {
    pub fn new(parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        FunctionLiteral { parameters, body }
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
