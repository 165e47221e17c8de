//! Executor: runs a linear program against a caller-supplied stack

use crate::error::SwirlResult;
use crate::program::Program;
use crate::stack::Stack;

/// Per-instruction jump context handed to every effect
///
/// An effect that calls [`Jump::to`] decides the next program counter
/// absolutely; otherwise execution advances by one.
#[derive(Debug, Default)]
pub struct Jump {
    target: Option<usize>,
}

impl Jump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an absolute jump; no implicit +1 is applied on top
    pub fn to(&mut self, pc: usize) {
        self.target = Some(pc);
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }
}

/// Runs programs; owns the execution program counter
///
/// The counter is independent of the parse-time counter, and running never
/// mutates the program, so one program may be executed repeatedly against
/// different stacks.
#[derive(Debug, Default)]
pub struct Executor {
    pc: usize,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `program` against `stack` to completion
    pub fn run(&mut self, stack: &mut Stack, program: &Program) -> SwirlResult<()> {
        self.pc = 0;
        while let Some(instruction) = program.get(self.pc) {
            let mut jump = Jump::new();
            if let Some(effect) = instruction.effect {
                effect(stack, instruction.operand.as_ref(), &mut jump)?;
            }
            self.pc = match jump.target() {
                Some(target) => target,
                None => self.pc + 1,
            };
        }
        Ok(())
    }
}
