/// The stack of active source lines.
///
/// Provides `Frame` and `CallStack`, which together identify where a failure
/// happened and which block headers it happened inside.
pub mod call_stack;

/// Reserved commands such as `print`.
pub mod commands;

/// State of a single `if` construct.
pub mod construct;

/// The line-by-line execution engine.
///
/// Classifies each line, matches `if`/`elseIf`/`else`/`end` blocks with an
/// explicit construct stack, runs assignments and commands, and turns the
/// first error into a `ScriptError`.
pub mod engine;

/// Sources of lines for interactive sessions.
pub mod source;
