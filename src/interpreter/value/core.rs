use std::rc::Rc;

use crate::{
    interpreter::value::type_tag::TypeTag,
    util::num::{f64_to_i64_exact, format_number, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every kind of value that can be produced by an
/// expression, bound to a variable, or compared inside a boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integral number.
    Integer(i64),
    /// A number with a fractional part (double precision floating-point).
    Real(f64),
    /// A string of text.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Produced by boolean expressions and by the `true`/`false` literals.
    Bool(bool),
    /// An ordered, heterogeneous array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A type tag such as `@Type:Number`.
    Type(TypeTag),
}

/// The broad kind of a [`Value`], used in error messages and compatibility
/// checks.
///
/// `Integer` and `Real` share the `Number` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `Value::String`
    String,
    /// `Value::Integer` or `Value::Real`
    Number,
    /// `Value::Bool`
    Boolean,
    /// `Value::Array`
    Array,
    /// `Value::Type`
    Type,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Array => "Array",
            Self::Type => "Type",
        };
        write!(f, "{name}")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<TypeTag> for Value {
    fn from(v: TypeTag) -> Self {
        Self::Type(v)
    }
}

impl Value {
    /// Builds a number value, choosing `Integer` when the number is exactly
    /// integral and `Real` otherwise.
    ///
    /// # Example
    /// ```
    /// use octane::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_number(4.0), Value::Integer(4));
    /// assert_eq!(Value::from_number(1.25), Value::Real(1.25));
    /// ```
    #[must_use]
    pub fn from_number(number: f64) -> Self {
        f64_to_i64_exact(number).map_or(Self::Real(number), Self::Integer)
    }

    /// Returns the broad kind of the value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) | Self::Real(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Array(_) => ValueKind::Array,
            Self::Type(_) => ValueKind::Type,
        }
    }

    /// Returns the numeric value of a number, or `None` for any other kind.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the value as a number for comparison purposes.
    ///
    /// Booleans take part in numeric comparison as `0` and `1`.
    #[must_use]
    pub const fn as_comparable_number(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => self.as_number(),
        }
    }

    /// Returns `true` for numbers and booleans, the values that may be freely
    /// compared with each other.
    #[must_use]
    pub const fn is_number_like(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_) | Self::Bool(_))
    }

    /// Evaluates the value for truthiness.
    ///
    /// Every value is truthy except the boolean `false`.
    ///
    /// # Example
    /// ```
    /// use octane::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_number(*r)),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(a) => {
                write!(f, "<")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ">")
            },
            Self::Type(tag) => write!(f, "{tag}"),
        }
    }
}
