//! # octane
//!
//! octane is a small line-oriented scripting language. A script is a sequence
//! of lines: assignments, reserved commands such as `print`, and
//! `if`/`elseIf`/`else`/`end` blocks guarded by bracketed boolean expressions.
//! Values are numbers, strings, booleans, arrays and type tags.

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

use std::io::Write;

use crate::{
    error::ScriptError,
    interpreter::runtime::{
        commands::CommandTable,
        engine::{Interpreter, Outcome},
    },
};

/// Defines the structure of parsed expressions and classified statements.
///
/// Expression text is parsed into operands, arithmetic and boolean trees only
/// when a line executes. Statements are classified by their leading word and
/// keep their argument text unparsed.
pub mod ast;
/// Provides the error types for parsing, evaluation and block structure.
///
/// Every error carries a human-readable message and a category. A failing
/// session reports its error as a `ScriptError`, together with the call stack
/// at the moment of failure.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attributes each error to the component it came from.
/// - Renders diagnostics with their call stack.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and line execution.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Format numbers in their canonical and decimal forms.
/// - Recognize plain numerals.
pub mod util;

/// Runs a script with the standard commands.
///
/// Output of `print` and `printInline` goes to `output`. Each line of `source`
/// is one statement, numbered from 1.
///
/// # Errors
/// Returns the first error the script raises, together with the call stack at
/// that point.
///
/// # Examples
/// ```
/// use octane::run_script;
///
/// let mut output: Vec<u8> = Vec::new();
/// let source = "set total to (2 * (1 + 1))\nprint \"total: \" . total";
/// assert!(run_script(source, &mut output).is_ok());
/// assert_eq!(output, b"total: 4\n");
///
/// // 'x' is not defined
/// let error = run_script("print x", &mut output).unwrap_err();
/// assert_eq!(error.line_numbers(), vec![1]);
/// ```
pub fn run_script(source: &str, output: impl Write) -> Result<Outcome, ScriptError> {
    let commands = CommandTable::standard();
    let mut interpreter = Interpreter::new(&commands, output);
    interpreter.run_script(source)
}
