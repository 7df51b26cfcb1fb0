//! Binding power of infix operators.

use std::fmt;

/// Precedence levels, lowest to highest.
///
/// An infix operator binds to the expression on its left only when its
/// level is strictly greater than the ceiling the caller passed in, which
/// makes equal-level operators left-associative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// Unary `-x` `!x`
    Prefix,
    /// `f(x)` and `a[i]`
    Call,
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precedence::Lowest => "LOWEST",
            Precedence::Equals => "EQUALS",
            Precedence::LessGreater => "LESSGREATER",
            Precedence::Sum => "SUM",
            Precedence::Product => "PRODUCT",
            Precedence::Prefix => "PREFIX",
            Precedence::Call => "CALL",
        };
        f.write_str(name)
    }
}
