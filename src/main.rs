//! Swirl demo driver
//!
//! Usage:
//!   swirl "123.456 789 + 2.1 +"
//!   swirl -f program.swl --stack "[[1, 2], 3]"
//!   swirl "+" --stack "[[1.2, 3.4], [5.6, 7.8]]" --json

use clap::Parser as ClapParser;
use colored::Colorize;
use std::fs;
use std::io::{self, Read};

use swirl::{Executor, Parser, Stack, Value};

#[derive(ClapParser, Debug)]
#[command(name = "swirl")]
#[command(version = "0.1.0")]
#[command(about = "Runs swirl programs against a value stack")]
struct Args {
    /// Program text (e.g., "123.456 789 + 2.1 +")
    #[arg(value_name = "PROGRAM")]
    program: Option<String>,

    /// Read program text from file
    #[arg(short = 'f', long = "file")]
    input_file: Option<String>,

    /// Initial stack as JSON, bottom first (e.g., "[[1, 2], 3]")
    #[arg(short = 's', long = "stack", default_value = "[]")]
    stack: String,

    /// Output the final stack as JSON
    #[arg(short = 'j', long = "json")]
    json_output: bool,

    /// List the parsed instructions before running
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Get program text from argument, file, or stdin
    let source = if let Some(program) = args.program {
        program
    } else if let Some(file) = args.input_file {
        fs::read_to_string(&file).unwrap_or_else(|e| {
            eprintln!("{}: Failed to read file '{}': {}", "Error".red(), file, e);
            std::process::exit(1);
        })
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).unwrap_or_else(|e| {
            eprintln!("{}: Failed to read stdin: {}", "Error".red(), e);
            std::process::exit(1);
        });
        buffer
    };

    let mut stack: Stack = match serde_json::from_str::<Vec<Value>>(&args.stack) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{}: Invalid initial stack: {}", "Error".red(), e);
            std::process::exit(1);
        }
    };

    let program = match Parser::new().parse(source.trim_end_matches('\n')) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {}", "Parse error".red(), e);
            std::process::exit(1);
        }
    };

    if args.verbose {
        println!("{}", "Parsed program".bold().blue());
        println!("{}", "=".repeat(35));
        for (pc, instruction) in program.instructions().iter().enumerate() {
            match &instruction.operand {
                Some(operand) => println!("{:>4}  {:<8} {:?}", pc, instruction.name, operand),
                None => println!("{:>4}  {}", pc, instruction.name),
            }
        }
        println!();
    }

    if let Err(e) = Executor::new().run(&mut stack, &program) {
        eprintln!("{}: {}", "Runtime error".red(), e);
        std::process::exit(1);
    }

    if args.json_output {
        match serde_json::to_string(&stack) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}: Failed to serialize stack: {}", "Error".red(), e);
                std::process::exit(1);
            }
        }
    } else {
        print_stack(&stack);
    }
}

fn print_stack(stack: &Stack) {
    if stack.is_empty() {
        println!("{}", "(empty stack)".yellow());
        return;
    }
    println!("{}", "Final stack (top last)".bold().green());
    println!("{}", "-".repeat(35));
    for value in stack {
        println!("  {}", value);
    }
}
