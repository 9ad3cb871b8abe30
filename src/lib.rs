//! # lip
//!
//! lip is an interpreter for `.lip` scripts, a small dynamically typed
//! language with German-flavoured keywords (`drucken`, `eingabe`, `elf`, `el`).
//! It tokenizes, parses and evaluates programs with optional typed variables,
//! user-defined functions, conditionals, counted loops and console I/O.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for `.lip` programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

pub use crate::interpreter::lexer::tokenize;

/// Parses a token sequence produced by [`tokenize`] into the program's
/// top-level statements.
///
/// # Example
/// ```
/// use lip::{parse, tokenize};
///
/// let tokens = tokenize("func double(x) { return x * 2 }\ndrucken(double(4))").unwrap();
/// assert_eq!(parse(&tokens).unwrap().len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> Result<Vec<Statement>, ParseError> {
    parse_program(tokens)
}

/// Tokenizes, parses and evaluates `source` in `context`.
///
/// The context keeps its variables and functions afterwards, so several
/// sources can be run one after another.
///
/// # Returns
/// The value of the last top-level statement, if it produced one.
///
/// # Example
/// ```
/// use lip::{
///     interpreter::{evaluator::core::Context, value::core::Value},
///     run,
/// };
///
/// let mut context = Context::with_io(Box::new(Vec::new()), Box::new(std::io::empty()));
///
/// let result = run("num x = 4\nx * 2", &mut context).unwrap();
/// assert_eq!(result, Some(Value::Integer(8)));
/// ```
pub fn run(source: &str, context: &mut Context) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    Ok(context.eval_toplevel(&program)?)
}

/// Runs a program on the console and reports whether it succeeded.
///
/// `drucken` writes to standard output and `eingabe` reads from standard
/// input. With `debug` set, the token sequence and the parsed statements are
/// printed before the run, and the final variables, sorted by name, after it.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use lip::get_result;
///
/// let source = "num result = 2 + 2";
/// assert!(get_result(source, false).is_ok());
///
/// // 'x' is not defined
/// let source = "y = x + 1";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();

    let tokens = tokenize(source)?;
    if debug {
        println!("Tokens:");
        for (token, line) in &tokens {
            println!("  {line:>4}: {token:?}");
        }
    }

    let program = parse(&tokens)?;
    if debug {
        println!("Statements:");
        for statement in &program {
            println!("  {statement:?}");
        }
    }

    let result = context.eval_toplevel(&program);

    if debug {
        println!("Environment:");
        for (name, value) in context.env.sorted() {
            println!("  {name}: {} = {value}", value.type_name());
        }
    }

    result?;
    Ok(())
}
