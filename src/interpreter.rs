/// The evaluator module computes values from expression text.
///
/// Evaluation is split by grammar: arithmetic, value expressions and boolean
/// expressions. All three are methods on the `Environment` that holds the
/// session's variables, and they call into each other for embedded
/// sub-expressions.
///
/// # Responsibilities
/// - Evaluates parsed expressions to `Value`s.
/// - Resolves variable names against the environment.
/// - Reports evaluation errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// Two token sets are defined: one for value and boolean expressions, and a
/// smaller one for arithmetic. Statements themselves are never tokenized; they
/// are classified by their leading word.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Converts token streams into `ast` nodes.
/// - Reports unbalanced delimiters, missing or unknown operators and malformed
///   literals.
/// - Bounds the nesting depth of brackets, arrays and parentheses.
pub mod parser;
/// The runtime module executes scripts line by line.
///
/// It owns everything that lives for a whole session: the call stack, the
/// stack of open `if` constructs, the reserved command table and the sources
/// lines are read from.
pub mod runtime;
/// The value module defines the runtime data types.
///
/// Values are numbers, strings, booleans, arrays and type tags. This module
/// also defines their canonical display form and truthiness.
pub mod value;
