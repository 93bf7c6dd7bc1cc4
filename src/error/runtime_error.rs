use crate::{error::Category, interpreter::value::core::ValueKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating parsed expressions.
pub enum RuntimeError {
    /// A bare token is neither a bound variable nor a numeric literal.
    BadArgument {
        /// The token as written.
        token: String,
    },
    /// An arithmetic operand names a variable that is not bound.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An arithmetic operand names a variable whose value is not a number.
    NonNumericOperand {
        /// The name of the variable.
        name:  String,
        /// The kind of value actually bound.
        found: ValueKind,
    },
    /// The right-hand side of `/` or `%` is zero.
    DivisionByZero {
        /// The operator that was applied.
        operator: String,
    },
    /// `0 rootOf x` has no meaning.
    InvalidRoot,
    /// An arithmetic expression produced infinity or NaN.
    NonFiniteResult,
    /// The two sides of a comparison or logical operator are not compatible.
    TypeMismatch {
        /// The operator that was applied.
        operator: String,
        /// The kind of the left operand.
        left:     ValueKind,
        /// The kind of the right operand.
        right:    ValueKind,
    },
    /// Type tags were ordered or combined logically.
    UnsupportedTypeOperation {
        /// The operator that was applied.
        operator: String,
    },
    /// A chained comparison continues onto an operand that is neither a boolean
    /// nor a number.
    InvalidChain {
        /// The operator continuing the chain.
        operator: String,
        /// The kind of the operand it was applied to.
        found:    ValueKind,
    },
    /// A reserved command could not write to its output.
    CommandFailed {
        /// The name of the command.
        name:    String,
        /// Details reported by the sink.
        details: String,
    },
}

impl RuntimeError {
    /// Returns the component this error is attributed to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::BadArgument { .. } => Category::Expression,
            Self::UnknownVariable { .. }
            | Self::NonNumericOperand { .. }
            | Self::DivisionByZero { .. }
            | Self::InvalidRoot
            | Self::NonFiniteResult => Category::Arithmetic,
            Self::TypeMismatch { .. }
            | Self::UnsupportedTypeOperation { .. }
            | Self::InvalidChain { .. } => Category::Boolean,
            Self::CommandFailed { .. } => Category::Dispatch,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadArgument { token } => write!(f, "Bad argument '{token}'."),
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::NonNumericOperand { name, found } => write!(f,
                                                              "Variable '{name}' holds a {found}, but arithmetic needs a Number."),
            Self::DivisionByZero { operator } => {
                write!(f, "Division by zero using '{operator}'.")
            },
            Self::InvalidRoot => write!(f, "Cannot take the 0th root of a number."),
            Self::NonFiniteResult => write!(f, "Arithmetic result is not a finite number."),
            Self::TypeMismatch { operator,
                                 left,
                                 right, } => {
                write!(f, "Cannot use '{operator}' on a {left} and a {right}.")
            },
            Self::UnsupportedTypeOperation { operator } => write!(f,
                                                                  "Types can only be compared using 'equals' or 'notEquals', not '{operator}'."),
            Self::InvalidChain { operator, found } => write!(f,
                                                             "Cannot continue a chained comparison with '{operator}' on a {found}; only a Boolean or Number may follow."),
            Self::CommandFailed { name, details } => {
                write!(f, "Command '{name}' failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
