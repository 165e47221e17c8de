//! The ordered rule table and its dispatcher
//!
//! The table is the language's entire grammar surface: one (name, pattern,
//! extractor, effect) entry per command, matched in table order against the
//! unconsumed input, first match wins. Adding an operator means adding one
//! entry in priority position. Numeric literals must precede the sign
//! operators they overlap with, so `+3` tokenizes as a literal and a bare `+`
//! falls through to the PLUS rule.

use regex::Regex;

use crate::broadcast::{combine, BinOp};
use crate::error::{SwirlError, SwirlResult};
use crate::executor::Jump;
use crate::index::{gather, scatter};
use crate::parser::ParseState;
use crate::program::{Effect, Instruction, Operand};
use crate::stack::{self, pop, Stack};
use crate::value::Value;

/// Extractor invoked at parse time with (matched text, parser state)
pub type Extractor = fn(&str, &mut ParseState) -> SwirlResult<Option<Operand>>;

/// One entry of the rule table
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    extract: Option<Extractor>,
    effect: Option<Effect>,
}

impl Rule {
    /// Build a rule from an unanchored pattern
    ///
    /// Table patterns are static strings; anchoring restricts matches to a
    /// prefix of the remaining input.
    pub fn new(
        name: &'static str,
        pattern: &str,
        extract: Option<Extractor>,
        effect: Option<Effect>,
    ) -> Self {
        let pattern =
            Regex::new(&format!("^(?:{})", pattern)).expect("rule patterns are static and valid");
        Self {
            name,
            pattern,
            extract,
            effect,
        }
    }

    /// Byte length of the non-empty prefix this rule matches, if any
    fn match_len(&self, input: &str) -> Option<usize> {
        self.pattern
            .find(input)
            .map(|m| m.end())
            .filter(|&end| end > 0)
    }
}

/// First-match-wins tokenizer over an ordered rule list
#[derive(Debug, Clone)]
pub struct Dispatcher {
    rules: Vec<Rule>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Match the front of `input` against the table, build the instruction
    /// and report how many bytes were consumed
    ///
    /// A miss aborts the whole parse with `UnrecognizedToken`; there is no
    /// per-character skipping.
    pub fn dispatch(&self, input: &str, state: &mut ParseState) -> SwirlResult<(Instruction, usize)> {
        for rule in &self.rules {
            if let Some(len) = rule.match_len(input) {
                let operand = match rule.extract {
                    Some(extract) => extract(&input[..len], state)?,
                    None => None,
                };
                let instruction = Instruction {
                    name: rule.name,
                    effect: rule.effect,
                    operand,
                };
                return Ok((instruction, len));
            }
        }
        Err(SwirlError::unrecognized(state.offset, input))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// The default command table, in match priority order
pub fn default_rules() -> Vec<Rule> {
    vec![
        // Literals first: their optional sign would otherwise be eaten by the
        // PLUS/MINUS rules.
        Rule::new(
            "FLOAT",
            r"[-+]?\d+\.\d*([eE][-+]?\d+)?",
            Some(number_literal),
            Some(push_number),
        ),
        Rule::new("INT", r"[-+]?\d+", Some(number_literal), Some(push_number)),
        Rule::new("PLUS", r"[+]", None, Some(add_op)),
        Rule::new("MINUS", r"-", None, Some(sub_op)),
        Rule::new("TIMES", r"[×*]", None, Some(mul_op)),
        Rule::new("DIVIDE", r"[÷/]", None, Some(div_op)),
        Rule::new("GET", r"@", None, Some(get_op)),
        Rule::new("SET", r"!", None, Some(set_op)),
        Rule::new("APPEND", r"[(]", None, Some(append_op)),
        Rule::new("SPLIT", r"[)]", None, Some(split_op)),
        Rule::new("COND", r"[?]", Some(open_conditional), Some(branch_op)),
        Rule::new("ELSE", r":", Some(mark_else), None),
        Rule::new("END", r"»", Some(mark_end), None),
        Rule::new("PRINT", r"p", None, Some(print_op)),
        Rule::new("NOP", r"\s+", None, None),
    ]
}

// --- extractors ---

fn number_literal(text: &str, state: &mut ParseState) -> SwirlResult<Option<Operand>> {
    let n: f64 = text
        .parse()
        .map_err(|_| SwirlError::unrecognized(state.offset, text))?;
    Ok(Some(Operand::Number(n)))
}

fn open_conditional(_text: &str, state: &mut ParseState) -> SwirlResult<Option<Operand>> {
    Ok(Some(Operand::Cond(state.open_conditional())))
}

fn mark_else(_text: &str, state: &mut ParseState) -> SwirlResult<Option<Operand>> {
    state.resolve_else()?;
    Ok(None)
}

fn mark_end(_text: &str, state: &mut ParseState) -> SwirlResult<Option<Operand>> {
    state.resolve_end()?;
    Ok(None)
}

// --- effects ---

fn push_number(stack: &mut Stack, operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    match operand {
        Some(Operand::Number(n)) => {
            stack.push(Value::Number(*n));
            Ok(())
        }
        _ => Err(SwirlError::OperandMismatch { op: "push" }),
    }
}

/// Pop right then left, push the broadcast combination
fn binary(stack: &mut Stack, op: BinOp, name: &'static str) -> SwirlResult<()> {
    let right = pop(stack, name, 2)?;
    let left = pop(stack, name, 2)?;
    stack.push(combine(&left, &right, op)?);
    Ok(())
}

fn add_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    binary(stack, BinOp::Add, "+")
}

fn sub_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    binary(stack, BinOp::Sub, "-")
}

fn mul_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    binary(stack, BinOp::Mul, "×")
}

fn div_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    binary(stack, BinOp::Div, "÷")
}

fn get_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    let index = pop(stack, "@", 2)?;
    let base = pop(stack, "@", 2)?;
    stack.push(gather(&base, &index)?);
    Ok(())
}

fn set_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    let value = pop(stack, "!", 3)?;
    let index = pop(stack, "!", 3)?;
    let base = pop(stack, "!", 3)?;
    stack.push(scatter(base, &index, &value)?);
    Ok(())
}

fn append_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    stack::append(stack)
}

fn split_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    stack::split(stack)
}

fn print_op(stack: &mut Stack, _operand: Option<&Operand>, _jump: &mut Jump) -> SwirlResult<()> {
    let top = stack
        .last()
        .ok_or(SwirlError::underflow("p", 1, 0))?;
    println!("{}", top);
    Ok(())
}

/// The conditional marker's run-time effect
///
/// Pops the condition. Truthy falls through to the next instruction; falsy
/// jumps to the else marker when one was parsed, otherwise to the end marker.
/// The else and end markers themselves carry no effect.
fn branch_op(stack: &mut Stack, operand: Option<&Operand>, jump: &mut Jump) -> SwirlResult<()> {
    let cond = match operand {
        Some(Operand::Cond(c)) => c,
        _ => return Err(SwirlError::OperandMismatch { op: "?" }),
    };
    let v = pop(stack, "?", 1)?;
    if v.is_truthy() {
        jump.to(cond.truth_target + 1);
    } else if let Some(target) = cond.else_target {
        jump.to(target);
    } else {
        let target = cond.end_target.ok_or(SwirlError::UnresolvedConditional {
            pc: cond.truth_target,
        })?;
        jump.to(target);
    }
    Ok(())
}
