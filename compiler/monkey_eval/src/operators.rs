//! Binary operator and index implementations for the evaluator.
//!
//! Dispatch is on the runtime types of both operands. Matching types select
//! a per-type operator table; differing types are a type mismatch; a pair
//! with no table is an unknown operator.

use monkey_ir::InfixOp;

use crate::errors::RuntimeError;
use crate::object::{Object, ObjectType, NULL};

/// Apply `op` to two already evaluated operands.
pub fn evaluate_infix(op: InfixOp, left: &Object, right: &Object) -> Result<Object, RuntimeError> {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_infix(op, *a, *b),
        (Object::Boolean(a), Object::Boolean(b)) => eval_bool_infix(op, *a, *b),
        (Object::String(a), Object::String(b)) => eval_string_infix(op, a, b),
        _ if left.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
            left: left.type_name(),
            op,
            right: right.type_name(),
        }),
        _ => Err(unknown_operator(op, left, right)),
    }
}

/// Integer arithmetic wraps on overflow.
fn eval_int_infix(op: InfixOp, a: i64, b: i64) -> Result<Object, RuntimeError> {
    let value = match op {
        InfixOp::Add => a.wrapping_add(b),
        InfixOp::Sub => a.wrapping_sub(b),
        InfixOp::Mul => a.wrapping_mul(b),
        InfixOp::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            a.wrapping_div(b)
        }
        InfixOp::Lt => return Ok(Object::from_native_bool(a < b)),
        InfixOp::Gt => return Ok(Object::from_native_bool(a > b)),
        InfixOp::Eq => return Ok(Object::from_native_bool(a == b)),
        InfixOp::NotEq => return Ok(Object::from_native_bool(a != b)),
    };
    Ok(Object::Integer(value))
}

fn eval_bool_infix(op: InfixOp, a: bool, b: bool) -> Result<Object, RuntimeError> {
    match op {
        InfixOp::Eq => Ok(Object::from_native_bool(a == b)),
        InfixOp::NotEq => Ok(Object::from_native_bool(a != b)),
        _ => Err(unknown_operator(
            op,
            &Object::from_native_bool(a),
            &Object::from_native_bool(b),
        )),
    }
}

fn eval_string_infix(op: InfixOp, a: &str, b: &str) -> Result<Object, RuntimeError> {
    match op {
        InfixOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Object::String(joined))
        }
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: ObjectType::String,
            op,
            right: ObjectType::String,
        }),
    }
}

#[cold]
fn unknown_operator(op: InfixOp, left: &Object, right: &Object) -> RuntimeError {
    RuntimeError::UnknownInfixOperator {
        left: left.type_name(),
        op,
        right: right.type_name(),
    }
}

/// `left[index]`. Out-of-range indexes, negative ones included, give `null`.
pub fn evaluate_index(left: &Object, index: &Object) -> Result<Object, RuntimeError> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(NULL)),
        (Object::Array(_), _) => Err(RuntimeError::InvalidIndex),
        _ => Err(RuntimeError::IndexNotSupported(left.type_name())),
    }
}
