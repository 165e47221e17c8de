//! Broadcasting arithmetic engine
//!
//! Binary operators combine mismatched scalar/list operands by cyclic index
//! alignment. The left operand's length is authoritative; the right operand
//! cycles. A scalar on the left against a list on the right combines with the
//! list's first element only — that asymmetry is part of the language
//! contract and is preserved exactly.

use crate::error::{SwirlError, SwirlResult};
use crate::value::Value;

/// Elementwise binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn apply(self, left: f64, right: f64) -> SwirlResult<f64> {
        match self {
            BinOp::Add => Ok(left + right),
            BinOp::Sub => Ok(left - right),
            BinOp::Mul => Ok(left * right),
            BinOp::Div => {
                if right == 0.0 {
                    Err(SwirlError::domain(format!("division of {} by zero", left)))
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "×"),
            BinOp::Div => write!(f, "÷"),
        }
    }
}

/// Recursively combine two operands under `op` with cyclic alignment
pub fn combine(left: &Value, right: &Value, op: BinOp) -> SwirlResult<Value> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(op.apply(*l, *r)?)),

        // Every element of the left list meets the scalar, recursing into
        // sub-lists along the way.
        (Value::List(ls), Value::Number(_)) => ls
            .iter()
            .map(|l| combine(l, right, op))
            .collect::<SwirlResult<Vec<_>>>()
            .map(Value::List),

        // Left length wins; the right operand cycles modulo its length.
        (Value::List(ls), Value::List(rs)) => {
            if rs.is_empty() {
                return Err(SwirlError::domain(format!(
                    "cannot broadcast {} against an empty sequence",
                    op
                )));
            }
            ls.iter()
                .enumerate()
                .map(|(i, l)| combine(l, &rs[i % rs.len()], op))
                .collect::<SwirlResult<Vec<_>>>()
                .map(Value::List)
        }

        // Only the first element of the right list participates.
        (Value::Number(_), Value::List(rs)) => {
            let first = rs.first().ok_or_else(|| {
                SwirlError::domain(format!("cannot broadcast {} against an empty sequence", op))
            })?;
            combine(left, first, op)
        }
    }
}
