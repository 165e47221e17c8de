//! The value stack and the operators that restructure list nesting

use crate::error::{SwirlError, SwirlResult};
use crate::value::Value;

/// The mutable value stack a program executes against
pub type Stack = Vec<Value>;

/// Pop one operand, reporting `op` in the underflow error
pub fn pop(stack: &mut Stack, op: &'static str, needed: usize) -> SwirlResult<Value> {
    let depth = stack.len();
    stack.pop().ok_or(SwirlError::underflow(op, needed, depth))
}

/// Append operator: fold the top value into the list beneath it
///
/// Pops x. If the stack is then empty, pushes `[x]`. Otherwise pops y,
/// wrapping it as `[y]` when it is not already a list, appends x and pushes
/// the result.
pub fn append(stack: &mut Stack) -> SwirlResult<()> {
    let x = pop(stack, "append", 1)?;
    match stack.pop() {
        Some(Value::List(mut items)) => {
            items.push(x);
            stack.push(Value::List(items));
        }
        Some(other) => stack.push(Value::List(vec![other, x])),
        None => stack.push(Value::List(vec![x])),
    }
    Ok(())
}

/// Split operator: separate a list into its prefix and tail element
///
/// Pops x. A non-list (or an empty list, which has no tail to address) is
/// pushed back unchanged. Otherwise pushes the prefix, then the tail on top.
pub fn split(stack: &mut Stack) -> SwirlResult<()> {
    let x = pop(stack, "split", 1)?;
    match x {
        Value::List(mut items) => match items.pop() {
            Some(tail) => {
                stack.push(Value::List(items));
                stack.push(tail);
            }
            None => stack.push(Value::List(items)),
        },
        other => stack.push(other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nums(ns: &[f64]) -> Value {
        Value::List(ns.iter().copied().map(Value::Number).collect())
    }

    #[test]
    fn test_append_to_list_beneath() {
        let mut stack = vec![nums(&[1.0]), Value::Number(1.2)];
        append(&mut stack).unwrap();
        assert_eq!(stack, vec![nums(&[1.0, 1.2])]);
    }

    #[test]
    fn test_append_wraps_non_list() {
        let mut stack = vec![Value::Number(1.0), Value::Number(2.0)];
        append(&mut stack).unwrap();
        assert_eq!(stack, vec![nums(&[1.0, 2.0])]);
    }

    #[test]
    fn test_append_on_singleton_stack() {
        let mut stack = vec![Value::Number(5.0)];
        append(&mut stack).unwrap();
        assert_eq!(stack, vec![nums(&[5.0])]);
    }

    #[test]
    fn test_append_underflow() {
        let mut stack = Stack::new();
        let err = append(&mut stack).unwrap_err();
        assert_eq!(
            err,
            SwirlError::StackUnderflow {
                op: "append",
                needed: 1,
                depth: 0
            }
        );
    }

    #[test]
    fn test_split_list() {
        let mut stack = vec![nums(&[1.0, 2.0, 3.4])];
        split(&mut stack).unwrap();
        assert_eq!(stack, vec![nums(&[1.0, 2.0]), Value::Number(3.4)]);
    }

    #[test]
    fn test_split_non_list_is_noop() {
        let mut stack = vec![Value::Number(5.0)];
        split(&mut stack).unwrap();
        assert_eq!(stack, vec![Value::Number(5.0)]);
    }

    #[test]
    fn test_split_empty_list_is_noop() {
        let mut stack = vec![Value::List(vec![])];
        split(&mut stack).unwrap();
        assert_eq!(stack, vec![Value::List(vec![])]);
    }
}
