//! Example: vectorized indexing
//!
//! `@` gathers and `!` scatters, both with modulo wraparound, so no index is
//! ever out of range.
//!
//! Run with: cargo run --example indexing

use swirl::{parse, Executor, Stack, Value};

fn nums(ns: &[f64]) -> Value {
    Value::List(ns.iter().copied().map(Value::Number).collect())
}

fn run_seeded(source: &str, mut stack: Stack) -> Stack {
    let program = parse(source).unwrap();
    Executor::new().run(&mut stack, &program).unwrap();
    stack
}

fn main() {
    println!("=== Indexing Example ===\n");

    println!("Example 1: Gather with wraparound");
    println!("Program: 4 @   (stack seeded with [10, 20, 30])");
    let stack = run_seeded("4 @", vec![nums(&[10.0, 20.0, 30.0])]);
    println!("Final stack: {}\n", stack[0]);

    println!("Example 2: Gather a flat index list");
    println!("Program: @   (stack seeded with [10, 20, 30] and [0, 2, 3])");
    let stack = run_seeded("@", vec![nums(&[10.0, 20.0, 30.0]), nums(&[0.0, 2.0, 3.0])]);
    println!("Final stack: {}\n", stack[0]);

    println!("Example 3: Scatter a cycling payload");
    println!("Program: !   (base [0, 0, 0, 0], indices [0, 1, 2], payload [9, 8])");
    let stack = run_seeded(
        "!",
        vec![
            nums(&[0.0, 0.0, 0.0, 0.0]),
            nums(&[0.0, 1.0, 2.0]),
            nums(&[9.0, 8.0]),
        ],
    );
    println!("Final stack: {}\n", stack[0]);

    println!("Example 4: Build a list with append, then split it");
    println!("Program: 1 2 ( 3 ( )");
    let stack = run_seeded("1 2 ( 3 ( )", Stack::new());
    println!("Final stack: {:?}", stack);
}
