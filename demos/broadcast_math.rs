//! Example: broadcast arithmetic
//!
//! Demonstrates cyclic alignment: the left operand's length is authoritative
//! and the right operand cycles modulo its length.
//!
//! Run with: cargo run --example broadcast_math

use swirl::{parse, Executor, Stack, Value};

fn nums(ns: &[f64]) -> Value {
    Value::List(ns.iter().copied().map(Value::Number).collect())
}

fn main() {
    println!("=== Broadcast Arithmetic Example ===\n");

    // Example 1: plain chained arithmetic from an empty stack
    println!("Example 1: Chained scalars");
    println!("Program: 123.456 789 + 2.1 +");
    let stack = swirl::eval("123.456 789 + 2.1 +").unwrap();
    println!("Final stack: {:?}\n", stack);

    // Example 2: elementwise addition of two seeded lists
    println!("Example 2: Elementwise list addition");
    println!("Program: +   (stack seeded with [1.2, 3.4] and [5.6, 7.8])");
    let program = parse("+").unwrap();
    let mut stack: Stack = vec![nums(&[1.2, 3.4]), nums(&[5.6, 7.8])];
    Executor::new().run(&mut stack, &program).unwrap();
    println!("Final stack: {}\n", stack[0]);

    // Example 3: the right operand cycles against a longer left operand
    println!("Example 3: Cyclic alignment");
    println!("Program: ×   (stack seeded with [1, 2, 3, 4] and [10, 100])");
    let program = parse("×").unwrap();
    let mut stack: Stack = vec![nums(&[1.0, 2.0, 3.0, 4.0]), nums(&[10.0, 100.0])];
    Executor::new().run(&mut stack, &program).unwrap();
    println!("Final stack: {}", stack[0]);
}
