//! Error types for the swirl interpreter

use thiserror::Error;

/// Result type for parse and execution operations
pub type SwirlResult<T> = Result<T, SwirlError>;

/// Interpreter errors
///
/// Parse-time errors abort the whole parse; execution-time errors abort the
/// run and leave the stack in whatever state the failing operator found it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SwirlError {
    #[error("unrecognized token at offset {offset}: {fragment:?}")]
    UnrecognizedToken { offset: usize, fragment: String },

    #[error("else marker at instruction {pc} with no open conditional")]
    DanglingElse { pc: usize },

    #[error("end marker at instruction {pc} with no open conditional")]
    DanglingEnd { pc: usize },

    #[error("stack underflow: {op} needs {needed} operand(s), stack has {depth}")]
    StackUnderflow {
        op: &'static str,
        needed: usize,
        depth: usize,
    },

    #[error("arithmetic domain error: {message}")]
    ArithmeticDomain { message: String },

    #[error("conditional at instruction {pc} jumped before its end marker was resolved")]
    UnresolvedConditional { pc: usize },

    #[error("shape dispatch violation: {message}")]
    ShapeDispatch { message: String },

    #[error("internal error: instruction operand mismatch for {op}")]
    OperandMismatch { op: &'static str },
}

impl SwirlError {
    pub fn unrecognized(offset: usize, rest: &str) -> Self {
        let fragment: String = rest.chars().take(16).collect();
        SwirlError::UnrecognizedToken { offset, fragment }
    }

    pub fn underflow(op: &'static str, needed: usize, depth: usize) -> Self {
        SwirlError::StackUnderflow { op, needed, depth }
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        SwirlError::ArithmeticDomain { message: msg.into() }
    }

    pub fn shape_violation(msg: impl Into<String>) -> Self {
        SwirlError::ShapeDispatch { message: msg.into() }
    }
}
