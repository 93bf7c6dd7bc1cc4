/// Shared parsing infrastructure.
///
/// Contains the token stream used by the value and boolean parsers, the
/// `ParseResult` alias and the nesting limit.
pub mod core;

/// Arithmetic expression parsing.
///
/// Parses fully parenthesized arithmetic such as `(1 + (x * 2))` into a
/// `MathExpr`. Operators share one precedence level and are kept in source
/// order.
pub mod arithmetic;

/// Operand and value expression parsing.
///
/// Parses dot-concatenated operands made of strings, numbers, names, type
/// tags, arrays and embedded arithmetic or boolean expressions.
pub mod operand;

/// Boolean expression parsing.
///
/// Parses bracketed comparison and logical chains, recursing into nested
/// brackets through the operand parser.
pub mod boolean;

/// Statement classification.
///
/// Sorts source lines into statements by their leading word and splits
/// assignments into their target and expression.
pub mod statement;
