/// The evaluator module executes statements as they are tokenized.
///
/// There is no parse phase: the evaluator pulls tokens on demand, computes
/// values with a recursive descent over a running accumulator, and performs
/// reads, writes and assignments as it goes.
///
/// # Responsibilities
/// - Dispatches read, write and assignment statements.
/// - Evaluates expressions with `*` and `/` binding tighter than `+` and `-`.
/// - Reports runtime errors such as division by zero or malformed input.
pub mod evaluator;
/// Numeric input for read-statements.
///
/// Splits a buffered reader into whitespace-separated words, one per
/// read-statement.
pub mod input;
/// The lexer module tokenizes program text.
///
/// The lexer reads the raw source text and produces classified tokens for
/// numbers, identifiers, operators, parentheses, `:=` and the `READ`/`WRITE`
/// keywords, skipping whitespace and block comments.
///
/// # Responsibilities
/// - Converts the input characters into tokens with captured text and source
///   line.
/// - Counts lines, including the ones inside comments.
/// - Reports unrecognized characters and malformed numbers as error tokens.
pub mod lexer;
/// The single-token lookahead cache between lexer and evaluator.
pub mod lookahead;
/// Variable storage for a run.
pub mod symbols;
