/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the statement dispatch loop, the read, write
/// and assignment statements, and run options.
pub mod core;

/// Expression evaluation.
///
/// The recursive, mode-driven evaluator that consumes tokens on demand and
/// computes values without building a syntax tree.
pub mod expression;

/// Arithmetic operators.
///
/// Applies `+`, `-`, `*` and `/` to two values, checking division by zero.
pub mod arithmetic;
