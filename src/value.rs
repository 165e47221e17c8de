//! The value model: scalars and arbitrarily nested sequences
//!
//! Every stack slot holds a `Value`. Operators never inspect concrete types
//! beyond this tag; all vectorized behavior is keyed off the derived
//! [`ShapeClass`] of an operand.

use serde::{Deserialize, Serialize};

use crate::error::{SwirlError, SwirlResult};

/// A scalar number or an ordered sequence of values
///
/// Serializes untagged, so a stack round-trips through plain JSON:
/// `[1, [2, 3.5]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    List(Vec<Value>),
}

/// Shape classification of a value by maximum nesting depth
///
/// `Scalar` is depth 0, `Flat` is max depth 1 (the empty list included),
/// `Nested` is anything deeper. Total: every value maps to exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    Scalar,
    Flat,
    Nested,
}

impl Value {
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Maximum nesting depth: 0 for a number, 1 + deepest element for a list
    pub fn depth(&self) -> usize {
        match self {
            Value::Number(_) => 0,
            Value::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
        }
    }

    pub fn shape_class(&self) -> ShapeClass {
        match self.depth() {
            0 => ShapeClass::Scalar,
            1 => ShapeClass::Flat,
            _ => ShapeClass::Nested,
        }
    }

    /// Truthiness for conditional branches: nonzero scalar or non-empty list
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::List(items) => !items.is_empty(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::List(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Cyclic index resolution: truncate toward zero, then Euclidean modulo
///
/// Negative and out-of-range indices wrap; indexing into an empty sequence
/// has no defined residue and fails.
pub fn cyclic(index: f64, len: usize) -> SwirlResult<usize> {
    if len == 0 {
        return Err(SwirlError::domain("cyclic index into empty sequence"));
    }
    let i = index.trunc() as i64;
    Ok(i.rem_euclid(len as i64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nums(ns: &[f64]) -> Value {
        Value::List(ns.iter().copied().map(Value::Number).collect())
    }

    #[test]
    fn test_depth_and_classification() {
        assert_eq!(Value::Number(1.0).shape_class(), ShapeClass::Scalar);
        assert_eq!(nums(&[1.0, 2.0]).shape_class(), ShapeClass::Flat);
        assert_eq!(Value::List(vec![]).shape_class(), ShapeClass::Flat);

        let nested = Value::List(vec![nums(&[1.0]), Value::Number(2.0)]);
        assert_eq!(nested.depth(), 2);
        assert_eq!(nested.shape_class(), ShapeClass::Nested);
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Number(1.0).is_truthy());
        assert!(Value::Number(-0.5).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(nums(&[0.0]).is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
    }

    #[test]
    fn test_cyclic_wraparound() {
        assert_eq!(cyclic(0.0, 3).unwrap(), 0);
        assert_eq!(cyclic(4.0, 3).unwrap(), 1);
        assert_eq!(cyclic(-1.0, 3).unwrap(), 2);
        assert_eq!(cyclic(2.9, 3).unwrap(), 2); // fractional indices truncate
        assert!(cyclic(0.0, 0).is_err());
    }

    #[test]
    fn test_display() {
        let v = Value::List(vec![Value::Number(1.0), nums(&[2.0, 3.5])]);
        assert_eq!(v.to_string(), "[1, [2, 3.5]]");
    }

    #[test]
    fn test_json_round_trip() {
        let v: Value = serde_json::from_str("[1, [2, 3.5]]").unwrap();
        assert_eq!(v, Value::List(vec![Value::Number(1.0), nums(&[2.0, 3.5])]));
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,[2.0,3.5]]");
    }
}
