//! Example: conditional branches
//!
//! `?` pops the condition; truthy falls through, falsy jumps to the else
//! marker `:` (or the end marker `»` when there is none).
//!
//! Run with: cargo run --example conditionals

use swirl::eval;

fn main() {
    println!("=== Conditional Example ===\n");

    println!("Program: 1 ? 2 » 3   (truthy: the branch runs)");
    println!("Final stack: {:?}\n", eval("1 ? 2 » 3").unwrap());

    println!("Program: 0 ? 2 » 3   (falsy: the branch is skipped)");
    println!("Final stack: {:?}\n", eval("0 ? 2 » 3").unwrap());

    println!("Program: 0 ? 2 : 4 » 5   (falsy: the else branch runs)");
    println!("Final stack: {:?}", eval("0 ? 2 : 4 » 5").unwrap());
}
