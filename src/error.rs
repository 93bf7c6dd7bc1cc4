/// Expression-text grammar errors.
///
/// Defines every error that can occur while lexing and parsing the text of a
/// value expression, an arithmetic expression, or a boolean expression:
/// unterminated strings, unbalanced delimiters, malformed concatenation,
/// missing or unknown operators and invalid literals.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all errors raised while evaluating an already parsed expression,
/// such as bad arguments, non-numeric arithmetic operands, division by zero
/// and type mismatches between compared values.
pub mod runtime_error;
/// Session-level diagnostics.
///
/// Wraps any error together with the call stack snapshot taken at the moment
/// of failure. This is what a session ultimately reports.
pub mod script_error;
/// Statement and block-structure errors.
///
/// Covers dangling or misplaced `elseIf`/`else`/`end` keywords, constructs left
/// open at end of script, invalid assignment targets and unknown commands.
pub mod syntax_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use script_error::ScriptError;
pub use syntax_error::SyntaxError;

/// The family an error belongs to.
///
/// Every error reported by the interpreter is attributed to the component that
/// detected it. The category is shown as the prefix of the rendered message,
/// e.g. `Boolean Error: ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Raised by the value expression evaluator.
    Expression,
    /// Raised by the arithmetic evaluator.
    Arithmetic,
    /// Raised by the boolean evaluator.
    Boolean,
    /// Raised by the statement classifier or the block matcher.
    Syntax,
    /// Raised while dispatching a reserved command.
    Dispatch,
    /// Raised when the interactive line source cannot be read.
    Input,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Expression => "Expression",
            Self::Arithmetic => "Arithmetic",
            Self::Boolean => "Boolean",
            Self::Syntax => "Syntax",
            Self::Dispatch => "Dispatch",
            Self::Input => "Input",
        };
        write!(f, "{name} Error")
    }
}

/// Any error that can end a session.
///
/// Evaluators return this type so that grammar and evaluation failures can be
/// propagated with `?` through the mutually recursive evaluators.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression text could not be parsed.
    Parse(ParseError),
    /// The expression was parsed but could not be evaluated.
    Runtime(RuntimeError),
    /// The statement or block structure is invalid.
    Syntax(SyntaxError),
    /// The interactive line source failed.
    Input {
        /// Details reported by the underlying reader.
        details: String,
    },
}

impl Error {
    /// Returns the category of the wrapped error.
    ///
    /// # Example
    /// ```
    /// use octane::error::{Category, Error, ParseError};
    ///
    /// let error = Error::from(ParseError::UnterminatedString { quote: '"' });
    /// assert_eq!(error.category(), Category::Expression);
    /// ```
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Parse(e) => e.category(),
            Self::Runtime(e) => e.category(),
            Self::Syntax(e) => e.category(),
            Self::Input { .. } => Category::Input,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Input { details } => write!(f, "Failed to read the next line: {details}."),
        }
    }
}

impl std::error::Error for Error {}
