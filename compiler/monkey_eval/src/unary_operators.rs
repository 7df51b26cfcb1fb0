//! Prefix operator implementations for the evaluator.

use monkey_ir::PrefixOp;

use crate::errors::RuntimeError;
use crate::object::Object;

/// Apply a prefix operator to an already evaluated operand.
///
/// `!` negates truthiness and accepts any operand. `-` needs an integer.
pub fn evaluate_prefix(op: PrefixOp, operand: &Object) -> Result<Object, RuntimeError> {
    match (op, operand) {
        (PrefixOp::Not, _) => Ok(Object::from_native_bool(!operand.is_truthy())),
        (PrefixOp::Neg, Object::Integer(n)) => Ok(Object::Integer(n.wrapping_neg())),
        (PrefixOp::Neg, _) => Err(RuntimeError::UnknownPrefixOperator {
            op,
            operand: operand.type_name(),
        }),
    }
}
