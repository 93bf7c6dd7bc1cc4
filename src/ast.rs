use crate::interpreter::value::type_tag::TypeTag;

/// An operand: one or more pieces joined by the `.` concatenation operator.
///
/// A single piece evaluates to a typed value. Several pieces evaluate to the
/// concatenation of their canonical text, which is then read back as a number
/// when it looks like one.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// The pieces in source order. Never empty.
    pub pieces: Vec<Piece>,
}

/// One value token of an operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    /// A quoted string, without its quotes.
    Text(String),
    /// A numeric literal such as `42` or `-1.5`.
    Number(f64),
    /// A `true` or `false` literal.
    Bool(bool),
    /// A bare word, resolved as a variable or else as a number.
    Word(String),
    /// A parenthesized arithmetic expression.
    Arithmetic(MathExpr),
    /// A bracketed boolean expression.
    Boolean(BoolExpr),
    /// An `<e1, e2, ...>` array literal.
    Array(Vec<Operand>),
    /// A `@Type:Name` literal.
    Type(TypeTag),
}

/// A bracketed boolean expression.
///
/// The operators of one bracket level all share the same precedence, so the
/// chain `first op1 second op2 third` evaluates as `(first op1 second) op2
/// third`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    /// The leading operand.
    pub first: Operand,
    /// Every following operator with its right-hand operand.
    pub rest:  Vec<(BoolOperator, Operand)>,
}

/// A parenthesized arithmetic expression, folded strictly left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct MathExpr {
    /// The leading term.
    pub first: MathTerm,
    /// Every following operator with its right-hand term.
    pub rest:  Vec<(MathOperator, MathTerm)>,
}

/// A single term of an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum MathTerm {
    /// A numeric literal.
    Number(f64),
    /// A variable holding a number.
    Variable(String),
    /// A nested parenthesized expression.
    Group(Box<MathExpr>),
}

/// Represents an arithmetic operator.
///
/// All arithmetic operators share the same precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floored modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// `a rootOf b`: the a-th root of b
    RootOf,
}

/// Represents a comparison or logical operator of a boolean expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoolOperator {
    /// `equals`
    Equals,
    /// `notEquals`
    NotEquals,
    /// `lessThan`
    LessThan,
    /// `lessThanEquals`
    LessThanEquals,
    /// `greaterThan`
    GreaterThan,
    /// `greaterThanEquals`
    GreaterThanEquals,
    /// `and`
    And,
    /// `or`
    Or,
}

impl BoolOperator {
    /// Looks up the operator spelled by `word`.
    ///
    /// # Example
    /// ```
    /// use octane::ast::BoolOperator;
    ///
    /// assert_eq!(BoolOperator::from_word("lessThanEquals"), Some(BoolOperator::LessThanEquals));
    /// assert_eq!(BoolOperator::from_word("lessthan"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "equals" => Some(Self::Equals),
            "notEquals" => Some(Self::NotEquals),
            "lessThan" => Some(Self::LessThan),
            "lessThanEquals" => Some(Self::LessThanEquals),
            "greaterThan" => Some(Self::GreaterThan),
            "greaterThanEquals" => Some(Self::GreaterThanEquals),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }

    /// Returns `true` for `and` and `or`.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Returns `true` for `equals` and `notEquals`.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equals | Self::NotEquals)
    }
}

/// Represents a top-level statement.
///
/// Statements are classified from the leading word of a line only. The text
/// that follows the keyword is kept unparsed, so a statement in a skipped
/// clause never has its expression examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'src> {
    /// A line with nothing but whitespace.
    Blank,
    /// A line starting with `#`.
    Comment,
    /// `set NAME to EXPR`, holding the text after `set`.
    Set(&'src str),
    /// `exit`, holding any trailing text.
    Exit(&'src str),
    /// `if COND`, holding the condition.
    If(&'src str),
    /// `elseIf COND`, holding the condition.
    ElseIf(&'src str),
    /// `else`, holding any trailing text.
    Else(&'src str),
    /// `end`, holding any trailing text.
    End(&'src str),
    /// `NAME EXPR`, a reserved command invocation.
    Command {
        /// The leading word.
        name:     &'src str,
        /// The argument text.
        argument: &'src str,
    },
}

impl std::fmt::Display for MathOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::RootOf => "rootOf",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::LessThan => "lessThan",
            Self::LessThanEquals => "lessThanEquals",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanEquals => "greaterThanEquals",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}
