//! Swirl: a stack-based command language with implicitly vectorized operators
//!
//! Commands are tokenized against an ordered rule table (first match wins),
//! parsed into a linear instruction program, and executed against a mutable
//! value stack of scalars and arbitrarily nested lists. Arithmetic and
//! indexing broadcast over nested structure with cyclic (modulo) alignment.
//!
//! # Example
//!
//! ```rust
//! use swirl::eval;
//!
//! let stack = eval("123.456 789 + 2.1 +").unwrap();
//! assert!((stack[0].as_number().unwrap() - 914.556).abs() < 1e-6);
//! ```

pub mod broadcast;
pub mod error;
pub mod executor;
pub mod index;
pub mod parser;
pub mod program;
pub mod rules;
pub mod stack;
pub mod value;

pub use broadcast::{combine, BinOp};
pub use error::{SwirlError, SwirlResult};
pub use executor::{Executor, Jump};
pub use index::{gather, scatter};
pub use parser::{ParseState, Parser};
pub use program::{Conditional, Instruction, Operand, Program};
pub use rules::{default_rules, Dispatcher, Rule};
pub use stack::Stack;
pub use value::{ShapeClass, Value};

/// Parse a command string with the default rule table
pub fn parse(source: &str) -> SwirlResult<Program> {
    Parser::new().parse(source)
}

/// Execute a program against an existing stack
pub fn run(stack: &mut Stack, program: &Program) -> SwirlResult<()> {
    Executor::new().run(stack, program)
}

/// Parse and execute against a fresh, empty stack, returning the final stack
pub fn eval(source: &str) -> SwirlResult<Stack> {
    let program = parse(source)?;
    let mut stack = Stack::new();
    run(&mut stack, &program)?;
    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eval_end_to_end() {
        let stack = eval("1 2 ( 3 (").unwrap();
        assert_eq!(
            stack,
            vec![Value::List(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0)
            ])]
        );
    }

    #[test]
    fn test_parse_then_run_on_seeded_stack() {
        let program = parse("10 +").unwrap();
        let mut stack = vec![Value::Number(5.0)];
        run(&mut stack, &program).unwrap();
        assert_eq!(stack, vec![Value::Number(15.0)]);
    }

    #[test]
    fn test_eval_surfaces_parse_errors() {
        assert!(matches!(
            eval("1 ~").unwrap_err(),
            SwirlError::UnrecognizedToken { offset: 2, .. }
        ));
    }
}
