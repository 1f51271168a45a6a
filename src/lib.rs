//! # calc_interp
//!
//! calc_interp is a one-pass interpreter for a small language of numeric
//! variables, `READ` and `WRITE` statements and arithmetic expressions.
//! Statements are tokenized and executed in a single interleaved pass; no
//! syntax tree is ever built.
//!
//! ```text
//! /* sum two numbers */
//! read a
//! read b
//! sum := a + b
//! write sum * 2
//! ```

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
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::interpreter::evaluator::core::Interpreter;
pub use crate::{error::Error, interpreter::evaluator::core::Options};

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines every error that can abort a run. Each carries the
/// source line it refers to, and its `Display` form is the diagnostic shown
/// to the user.
///
/// # Responsibilities
/// - Defines syntax errors (invalid tokens, misplaced tokens, unclosed
///   groups).
/// - Defines runtime errors (division by zero, bad numeric input).
/// - Wraps both, and I/O failures, in a single crate-level `Error`.
pub mod error;
/// Orchestrates program execution.
///
/// This module ties together the lexer, the lookahead cache, the symbol
/// table, numeric input and the evaluator.
///
/// # Responsibilities
/// - Turns program text into tokens on demand.
/// - Executes statements as soon as they are recognized.
/// - Manages the flow of data and errors between the pieces.
pub mod interpreter;

/// Runs a whole program and returns the number of statements executed.
///
/// Numbers requested by read-statements come from `input`. Prompts, results
/// and the final `Number of tokens = <count>` line go to `output`, which is
/// flushed before returning whether or not the run succeeded.
///
/// # Errors
/// Returns the first syntax, runtime or I/O error. Statements before the
/// failing one have already run and written their output.
///
/// # Examples
/// ```
/// use calc_interp::{Options, run_program};
///
/// let mut output = Vec::new();
/// let count = run_program("read x\nwrite x * 2", "21".as_bytes(), &mut output, Options::default()).unwrap();
///
/// assert_eq!(count, 2);
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Write: 42"));
///
/// // Dividing by zero aborts the run.
/// let mut output = Vec::new();
/// assert!(run_program("write 1 / 0", std::io::empty(), &mut output, Options::default()).is_err());
/// ```
pub fn run_program<R: BufRead, W: Write>(source: &str,
                                         input: R,
                                         output: W,
                                         options: Options)
                                         -> Result<usize, Error> {
    let mut interpreter = Interpreter::new(source, input, output, options);

    let result = interpreter.run();
    interpreter.flush()?;
    result
}
