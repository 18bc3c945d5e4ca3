//! # juicy
//!
//! juicy is an interpreter for Juicy, a small dynamically typed scripting
//! language written in Rust.
//! It lexes, parses and evaluates programs with integers, floats, strings,
//! booleans, chained comparisons, `if`/`else` and `while`.

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

use std::io::{BufRead, Write};

use crate::{error::DiagnosticSink, interpreter::evaluator::core::Interpreter};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for diagnostics.
pub mod ast;
/// Provides error and diagnostic types for parsing and evaluation.
///
/// Fatal failures are error enums that abort a run. Everything else is a
/// diagnostic: an error or warning with a message and a source location,
/// handed to a [`DiagnosticSink`] while evaluation continues.
///
/// # Responsibilities
/// - Defines the fatal `ParseError` and `RuntimeError` enums.
/// - Defines `Diagnostic`, `Severity` and the `DiagnosticSink` trait.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for Juicy programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
///
/// # Responsibilities
/// - Convert between `i64`, `usize`, and `f64` without silent data loss.
/// - Format floats the way programs print them.
pub mod util;

/// Runs a complete program.
///
/// The source is lexed and parsed in full before anything runs. Program
/// output goes to `output`, `input(...)` reads lines from `input` and every
/// diagnostic is handed to `sink`.
///
/// # Errors
/// Returns an error if lexing or parsing fails (the error is also reported
/// to `sink`), or if reading input or writing output fails. Ordinary runtime
/// problems such as undefined variables are only reported to `sink`.
///
/// # Examples
/// ```
/// use std::io::{self, Cursor};
///
/// use juicy::{error::Diagnostic, run};
///
/// let mut output = Vec::new();
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// let source = "i := 0; while (i < 3) { print(i); i := i + 1; }";
/// run(source, &mut io::empty(), &mut output, &mut diagnostics).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "0\n1\n2\n");
///
/// // An undefined variable is a diagnostic, not a failure.
/// let mut output = Vec::new();
/// run("print(y);", &mut Cursor::new(""), &mut output, &mut diagnostics).unwrap();
/// assert_eq!(diagnostics[0].message, "Variable 'y' is not defined");
///
/// // A syntax error aborts the run.
/// assert!(run("print(1", &mut io::empty(), &mut Vec::new(), &mut diagnostics).is_err());
/// ```
pub fn run(source: &str,
           input: &mut dyn BufRead,
           output: &mut dyn Write,
           sink: &mut dyn DiagnosticSink)
           -> Result<(), Box<dyn std::error::Error>> {
    Interpreter::new(input, output, sink).run(source)
}
