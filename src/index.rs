//! Vectorized indexing: gather (get) and scatter (indexed assignment)
//!
//! Both operations dispatch on the shape class of their operands. All index
//! arithmetic is cyclic: indices truncate toward zero and wrap modulo the
//! target length, so there is no out-of-range failure. Scatter is governed by
//! the ordered (base, index, value) shape-class triple — 27 cases with two
//! deliberate exception groups. The table is asymmetric on purpose; it is the
//! language contract, not an approximation of one.

use crate::error::{SwirlError, SwirlResult};
use crate::value::{cyclic, ShapeClass, Value};

fn class_mismatch(op: &'static str) -> SwirlError {
    // Unreachable with a total classifier: a Scalar class is always a Number
    // variant and a Flat/Nested class is always a List variant.
    SwirlError::shape_violation(format!("{}: classifier and value variant disagree", op))
}

/// Vectorized get: resolve `index` against `base`
///
/// - scalar index: `base` itself when scalar, else `base[index mod len]`
/// - flat index: one result element per index element, each as the scalar case
/// - nested index against a scalar base: gather distributes over the index
/// - nested index against a list base: `gather(base[i], index[i mod len(index)])`
///   for each i over the base's indices
pub fn gather(base: &Value, index: &Value) -> SwirlResult<Value> {
    match (index.shape_class(), index) {
        (ShapeClass::Scalar, Value::Number(i)) => match base {
            Value::Number(_) => Ok(base.clone()),
            Value::List(items) => Ok(items[cyclic(*i, items.len())?].clone()),
        },

        (ShapeClass::Flat, Value::List(indices)) => indices
            .iter()
            .map(|ix| gather(base, ix))
            .collect::<SwirlResult<Vec<_>>>()
            .map(Value::List),

        (ShapeClass::Nested, Value::List(indices)) => match base {
            Value::Number(_) => indices
                .iter()
                .map(|ix| gather(base, ix))
                .collect::<SwirlResult<Vec<_>>>()
                .map(Value::List),
            // A nested list is never empty, so the cycle below is well defined.
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| gather(item, &indices[i % indices.len()]))
                .collect::<SwirlResult<Vec<_>>>()
                .map(Value::List),
        },

        _ => Err(class_mismatch("gather")),
    }
}

/// Supply the i-th cyclic element of a list operand, or the operand itself
/// when it is a scalar
fn cycled(v: &Value, i: usize) -> SwirlResult<&Value> {
    match v {
        Value::Number(_) => Ok(v),
        Value::List(items) => {
            if items.is_empty() {
                Err(SwirlError::domain("cyclic index into empty sequence"))
            } else {
                Ok(&items[i % items.len()])
            }
        }
    }
}

/// Vectorized scatter: assign `value` into `base` at `index`, returning the
/// updated base
///
/// Dispatch on the ordered shape triple (base, index, value):
///
/// - **scalar base**: the write replaces the whole value — except a nested
///   index against a scalar or flat payload, which leaves the base unchanged
/// - **flat base, scalar index**: `base[index mod len] = value`, any payload shape
/// - **flat base, flat index**: each index element receives the payload
///   scalar, or cycles the payload list (`value[i mod len(value)]`)
/// - **flat base, nested index**: the full scatter recurses once per index
///   element, threading the base through sequentially, so later elements may
///   overwrite earlier writes
/// - **nested base, scalar index, flat/nested payload**: the addressed
///   sub-element is replaced wholesale
/// - **nested base otherwise**: elementwise recursion into the base, cycling
///   index and payload against the base's length (scalars pass through)
pub fn scatter(base: Value, index: &Value, value: &Value) -> SwirlResult<Value> {
    use ShapeClass::{Flat, Nested, Scalar};

    match (base.shape_class(), index.shape_class(), value.shape_class()) {
        (Scalar, Nested, Scalar | Flat) => Ok(base),
        (Scalar, _, _) => Ok(value.clone()),

        (Flat, Scalar, _) => {
            let Value::List(mut items) = base else {
                return Err(class_mismatch("scatter"));
            };
            let Some(i) = index.as_number() else {
                return Err(class_mismatch("scatter"));
            };
            let k = cyclic(i, items.len())?;
            items[k] = value.clone();
            Ok(Value::List(items))
        }

        (Flat, Flat, _) => {
            let Value::List(mut items) = base else {
                return Err(class_mismatch("scatter"));
            };
            let Value::List(indices) = index else {
                return Err(class_mismatch("scatter"));
            };
            for (n, ix) in indices.iter().enumerate() {
                // A flat index list holds scalars only.
                let Some(i) = ix.as_number() else {
                    return Err(class_mismatch("scatter"));
                };
                let k = cyclic(i, items.len())?;
                items[k] = cycled(value, n)?.clone();
            }
            Ok(Value::List(items))
        }

        (Flat, Nested, _) => {
            let Value::List(indices) = index else {
                return Err(class_mismatch("scatter"));
            };
            let mut acc = base;
            for ix in indices {
                acc = scatter(acc, ix, value)?;
            }
            Ok(acc)
        }

        (Nested, Scalar, Flat | Nested) => {
            let Value::List(mut items) = base else {
                return Err(class_mismatch("scatter"));
            };
            let Some(i) = index.as_number() else {
                return Err(class_mismatch("scatter"));
            };
            let k = cyclic(i, items.len())?;
            items[k] = value.clone();
            Ok(Value::List(items))
        }

        (Nested, _, _) => {
            let Value::List(items) = base else {
                return Err(class_mismatch("scatter"));
            };
            items
                .into_iter()
                .enumerate()
                .map(|(i, slot)| scatter(slot, cycled(index, i)?, cycled(value, i)?))
                .collect::<SwirlResult<Vec<_>>>()
                .map(Value::List)
        }
    }
}
