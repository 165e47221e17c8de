//! Linear instruction programs
//!
//! A program is an immutable-once-built sequence of instructions. Conditional
//! branch targets are expressed in parse-time program-counter units, i.e. the
//! index of the instruction carrying the marker.

use crate::error::SwirlResult;
use crate::executor::Jump;
use crate::stack::Stack;

/// Effect function invoked by the executor: (stack, operand, jump context)
pub type Effect = fn(&mut Stack, Option<&Operand>, &mut Jump) -> SwirlResult<()>;

/// Resolved operand attached to an instruction at parse time
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Numeric literal for a push
    Number(f64),
    /// Branch record for a conditional marker
    Cond(Conditional),
}

/// Branch record for one open-conditional marker
///
/// `truth_target` is the marker's own instruction index; the else/end targets
/// are patched in by their markers while the program is still under
/// construction and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditional {
    pub truth_target: usize,
    pub else_target: Option<usize>,
    pub end_target: Option<usize>,
}

impl Conditional {
    pub fn at(pc: usize) -> Self {
        Self {
            truth_target: pc,
            else_target: None,
            end_target: None,
        }
    }
}

/// One instruction: the matched rule's name (diagnostics), its effect, and
/// the operand the extractor resolved
///
/// A `None` effect is a normal no-op instruction (whitespace, markers).
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub name: &'static str,
    pub effect: Option<Effect>,
    pub operand: Option<Operand>,
}

/// An executable program; never mutates after parsing completes and may be
/// run any number of times against different stacks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub(crate) fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<&Instruction> {
        self.instructions.get(pc)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditional_starts_unresolved() {
        let c = Conditional::at(3);
        assert_eq!(c.truth_target, 3);
        assert_eq!(c.else_target, None);
        assert_eq!(c.end_target, None);
    }

    #[test]
    fn test_program_access() {
        let p = Program::new(vec![Instruction {
            name: "NOP",
            effect: None,
            operand: None,
        }]);
        assert_eq!(p.len(), 1);
        assert!(p.get(1).is_none());
        assert_eq!(p.instructions()[0].name, "NOP");
    }
}
