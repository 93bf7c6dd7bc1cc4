/// Variable storage and the evaluation result type.
///
/// Defines `Environment`, which owns the variables of a session and carries
/// every evaluation entry point as a method.
pub mod core;

/// Arithmetic evaluation.
///
/// Folds parenthesized arithmetic left to right and formats the result in
/// decimal form.
pub mod arithmetic;

/// Value expression evaluation.
///
/// Evaluates dot concatenations and typed single operands, and reads
/// assembled text back as a number where possible.
pub mod expression;

/// Boolean expression evaluation.
///
/// Folds comparison and logical chains left to right.
pub mod boolean;

/// Compatibility, equality and ordering of values.
pub mod comparison;

/// Truthiness-based `and` and `or`.
pub mod logic;
