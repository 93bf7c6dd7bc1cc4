use crate::error::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing or parsing expression
/// text.
pub enum ParseError {
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The quote character that opened the string.
        quote: char,
    },
    /// A numeric literal whose magnitude does not fit in a number.
    NumberOutOfRange {
        /// The literal as written.
        literal:  String,
        /// The grammar being lexed.
        category: Category,
    },
    /// A character that no token can start with.
    UnexpectedCharacter {
        /// The offending text.
        found:    String,
        /// The grammar being lexed.
        category: Category,
    },
    /// The value tokens of an expression do not alternate with single `.`
    /// tokens.
    MalformedConcatenation {
        /// What was wrong with the concatenation.
        details: String,
    },
    /// An operand was expected but something else was found.
    ExpectedOperand {
        /// The token found instead, or `end of input`.
        found:    String,
        /// The grammar being parsed.
        category: Category,
    },
    /// Parentheses of an arithmetic expression are not balanced.
    UnbalancedParentheses {
        /// Which side is missing or extra.
        details: String,
    },
    /// Brackets of a boolean expression are not balanced.
    UnbalancedBrackets {
        /// Which side is missing or extra.
        details: String,
    },
    /// An array literal is missing a delimiter or has a stray one.
    MalformedArray {
        /// What was wrong with the array.
        details: String,
    },
    /// A word in operator position is not a known operator.
    UnknownOperator {
        /// The unrecognized operator.
        operator: String,
        /// The grammar being parsed.
        category: Category,
    },
    /// Two operands follow each other without an operator.
    MissingOperator {
        /// The token found where an operator was expected.
        found:    String,
        /// The grammar being parsed.
        category: Category,
    },
    /// A `@Type:Name` literal names no known type.
    InvalidTypeTag {
        /// The full literal as written.
        literal: String,
    },
    /// Brackets, arrays or parentheses are nested deeper than the parser
    /// allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// The grammar being parsed.
        category: Category,
    },
}

impl ParseError {
    /// Returns the component this error is attributed to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::UnterminatedString { .. } | Self::MalformedConcatenation { .. } => {
                Category::Expression
            },
            Self::UnbalancedParentheses { .. } => Category::Arithmetic,
            Self::UnbalancedBrackets { .. }
            | Self::MalformedArray { .. }
            | Self::InvalidTypeTag { .. } => Category::Boolean,
            Self::UnexpectedCharacter { category, .. }
            | Self::NumberOutOfRange { category, .. }
            | Self::ExpectedOperand { category, .. }
            | Self::UnknownOperator { category, .. }
            | Self::MissingOperator { category, .. }
            | Self::NestingTooDeep { category, .. } => *category,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { quote } => {
                write!(f, "String opened with {quote} is never closed.")
            },
            Self::UnexpectedCharacter { found, .. } => write!(f, "Unexpected character '{found}'."),
            Self::NumberOutOfRange { literal, .. } => {
                write!(f, "Number '{literal}' is too large to represent.")
            },
            Self::MalformedConcatenation { details } => {
                write!(f, "Extra or missing '.', '\"', or \"'\": {details}.")
            },
            Self::ExpectedOperand { found, .. } => {
                write!(f, "Expected an operand but found {found}.")
            },
            Self::UnbalancedParentheses { details } => {
                write!(f, "Extra or missing parentheses: {details}.")
            },
            Self::UnbalancedBrackets { details } => write!(f, "Extra or missing brackets: {details}."),
            Self::MalformedArray { details } => write!(f, "Malformed array: {details}."),
            Self::UnknownOperator { operator, .. } => write!(f, "Unknown operator '{operator}'."),
            Self::MissingOperator { found, .. } => {
                write!(f, "Missing operator before {found}.")
            },
            Self::InvalidTypeTag { literal } => write!(f,
                                                       "Invalid type '{literal}'. Expected one of @Type:String, @Type:Number, @Type:Boolean, @Type:Array or @Type:Function."),
            Self::NestingTooDeep { limit, .. } => {
                write!(f, "Expression is nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
