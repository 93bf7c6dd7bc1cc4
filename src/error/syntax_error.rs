use crate::error::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors in statement shape and block structure.
pub enum SyntaxError {
    /// `elseIf`, `else` or `end` appeared with no open `if`.
    DanglingKeyword {
        /// The keyword as written.
        keyword: String,
    },
    /// `elseIf` or `else` appeared after the construct's `else`.
    ClauseAfterElse {
        /// The keyword as written.
        keyword: String,
    },
    /// The script ended while constructs were still open.
    MissingEnd {
        /// The number of constructs left open.
        open: usize,
    },
    /// A keyword that takes no argument was followed by text.
    UnexpectedArgument {
        /// The keyword.
        keyword:  String,
        /// The trailing text.
        argument: String,
    },
    /// An assignment did not have the shape `set NAME to EXPR`.
    MalformedAssignment {
        /// What was wrong with the assignment.
        details: String,
    },
    /// An assignment target contains characters that are not allowed.
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },
    /// An assignment target is a keyword or a command name.
    IdentifierReserved {
        /// The rejected name.
        name: String,
    },
    /// The leading word of a statement is not a known command.
    UnknownCommand {
        /// The leading word.
        name: String,
    },
}

impl SyntaxError {
    /// Returns the component this error is attributed to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::UnknownCommand { .. } => Category::Dispatch,
            _ => Category::Syntax,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingKeyword { keyword } => {
                write!(f, "'{keyword}' has no matching 'if'.")
            },
            Self::ClauseAfterElse { keyword } => {
                write!(f, "'{keyword}' cannot follow 'else' in the same block.")
            },
            Self::MissingEnd { open } => {
                write!(f, "Missing 'end': {open} block(s) still open at end of script.")
            },
            Self::UnexpectedArgument { keyword, argument } => {
                write!(f, "'{keyword}' takes no argument, found '{argument}'.")
            },
            Self::MalformedAssignment { details } => write!(f,
                                                            "Invalid assignment: {details}. Expected 'set NAME to EXPRESSION'."),
            Self::InvalidIdentifier { name } => write!(f,
                                                       "Invalid variable name '{name}'. Names may only contain letters and underscores."),
            Self::IdentifierReserved { name } => write!(f, "Identifier '{name}' is reserved."),
            Self::UnknownCommand { name } => write!(f, "Unknown command '{name}'."),
        }
    }
}

impl std::error::Error for SyntaxError {}
