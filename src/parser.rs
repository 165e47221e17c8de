//! Parser: drives the dispatcher over a command string and emits a program
//!
//! The parse-time program counter counts emitted instructions and is the
//! addressing scheme for conditional branch targets. It is independent of the
//! executor's program counter.

use crate::error::{SwirlError, SwirlResult};
use crate::program::{Conditional, Instruction, Operand, Program};
use crate::rules::{Dispatcher, Rule};

/// Mutable state threaded through extractors while a program is built
#[derive(Debug, Default)]
pub struct ParseState {
    /// Count of instructions emitted so far; the index the next instruction
    /// will occupy
    pub pc: usize,
    /// Byte offset into the source, for error reporting
    pub offset: usize,
    /// Instruction indices of open conditionals, innermost last
    ///
    /// The end marker deliberately never pops this stack; that reproduces the
    /// observed single-top-level-conditional semantics of the language.
    open: Vec<usize>,
    instructions: Vec<Instruction>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
        self.pc += 1;
    }

    pub(crate) fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Open a conditional at the current pc and return its branch record
    pub fn open_conditional(&mut self) -> Conditional {
        self.open.push(self.pc);
        Conditional::at(self.pc)
    }

    /// Point the innermost open conditional's else target at the current pc
    pub fn resolve_else(&mut self) -> SwirlResult<()> {
        let pc = self.pc;
        let idx = *self
            .open
            .last()
            .ok_or(SwirlError::DanglingElse { pc })?;
        // Targets are write-once; a second marker against the same record is
        // ignored.
        if let Some(Operand::Cond(cond)) = self.instructions[idx].operand.as_mut() {
            if cond.else_target.is_none() {
                cond.else_target = Some(pc);
            }
        }
        Ok(())
    }

    /// Point the innermost open conditional's end target at the current pc
    pub fn resolve_end(&mut self) -> SwirlResult<()> {
        let pc = self.pc;
        let idx = *self
            .open
            .last()
            .ok_or(SwirlError::DanglingEnd { pc })?;
        if let Some(Operand::Cond(cond)) = self.instructions[idx].operand.as_mut() {
            if cond.end_target.is_none() {
                cond.end_target = Some(pc);
            }
        }
        Ok(())
    }
}

/// Turns command text into an executable [`Program`]
pub struct Parser {
    dispatcher: Dispatcher,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(),
        }
    }

    /// Parse with a caller-supplied rule table
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            dispatcher: Dispatcher::with_rules(rules),
        }
    }

    /// Tokenize the whole source, one instruction per matched rule
    ///
    /// A dispatch failure aborts the parse; the partial program is discarded.
    pub fn parse(&self, source: &str) -> SwirlResult<Program> {
        let mut state = ParseState::new();
        let mut rest = source;
        while !rest.is_empty() {
            let (instruction, consumed) = self.dispatcher.dispatch(rest, &mut state)?;
            state.emit(instruction);
            state.offset += consumed;
            rest = &rest[consumed..];
        }
        Ok(Program::new(state.into_instructions()))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn conditional_at(program: &Program, pc: usize) -> Conditional {
        match program.get(pc).and_then(|i| i.operand.as_ref()) {
            Some(Operand::Cond(c)) => *c,
            other => panic!("expected conditional operand at {}, got {:?}", pc, other),
        }
    }

    #[test]
    fn test_one_instruction_per_match() {
        let program = Parser::new().parse("123.456 789 +").unwrap();
        // FLOAT NOP INT NOP PLUS
        assert_eq!(program.len(), 5);
        let names: Vec<_> = program.instructions().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["FLOAT", "NOP", "INT", "NOP", "PLUS"]);
    }

    #[test]
    fn test_conditional_targets_without_else() {
        let program = Parser::new().parse("1 ? 2 » 3").unwrap();
        // 0:INT 1:NOP 2:COND 3:NOP 4:INT 5:NOP 6:END 7:NOP 8:INT
        let cond = conditional_at(&program, 2);
        assert_eq!(cond.truth_target, 2);
        assert_eq!(cond.else_target, None);
        assert_eq!(cond.end_target, Some(6));
    }

    #[test]
    fn test_conditional_targets_with_else() {
        let program = Parser::new().parse("1 ? 2 : 3 »").unwrap();
        // 0:INT 1:NOP 2:COND 3:NOP 4:INT 5:NOP 6:ELSE 7:NOP 8:INT 9:NOP 10:END
        let cond = conditional_at(&program, 2);
        assert_eq!(cond.else_target, Some(6));
        assert_eq!(cond.end_target, Some(10));
    }

    #[test]
    fn test_dangling_else() {
        let err = Parser::new().parse("1 : 2").unwrap_err();
        assert_eq!(err, SwirlError::DanglingElse { pc: 2 });
    }

    #[test]
    fn test_dangling_end() {
        let err = Parser::new().parse("»").unwrap_err();
        assert_eq!(err, SwirlError::DanglingEnd { pc: 0 });
    }

    #[test]
    fn test_unrecognized_aborts_with_offset() {
        let err = Parser::new().parse("1 2 ~").unwrap_err();
        assert_eq!(
            err,
            SwirlError::UnrecognizedToken {
                offset: 4,
                fragment: "~".to_string()
            }
        );
    }

    #[test]
    fn test_end_marker_keeps_conditional_open() {
        // The end marker never pops the open-conditional stack, so a second
        // end marker re-targets the innermost record and the write-once guard
        // drops it. The outer conditional stays unresolved.
        let program = Parser::new().parse("1 ? 1 ? 2 » »").unwrap();
        let outer = conditional_at(&program, 2);
        let inner = conditional_at(&program, 6);
        assert_eq!(inner.end_target, Some(10));
        assert_eq!(outer.end_target, None);
    }

    #[test]
    fn test_unclosed_conditional_parses() {
        // No end marker is a parse-time non-event; the branch only fails at
        // run time if the falsy path needs the missing target.
        let program = Parser::new().parse("1 ? 2").unwrap();
        let cond = conditional_at(&program, 2);
        assert_eq!(cond.end_target, None);
    }
}
