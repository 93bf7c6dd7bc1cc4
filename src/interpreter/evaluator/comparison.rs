use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    ast::BoolOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Environment, value::core::Value},
};

impl Environment {
    /// Checks that two values may be compared or combined with `operator`.
    ///
    /// Strings pair only with strings and arrays only with arrays. Numbers and
    /// booleans pair freely with each other. Type tags pair only with type
    /// tags, and only for `equals` and `notEquals`.
    ///
    /// # Errors
    /// - `UnsupportedTypeOperation` for type tags with any other operator.
    /// - `TypeMismatch` for every other pairing.
    ///
    /// # Example
    /// ```
    /// use octane::{
    ///     ast::BoolOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let one = Value::Integer(1);
    ///
    /// assert!(Environment::check_compatible(BoolOperator::Or, &one, &Value::Bool(true)).is_ok());
    /// assert!(Environment::check_compatible(BoolOperator::Equals, &one, &Value::from("1")).is_err());
    /// ```
    pub fn check_compatible(operator: BoolOperator,
                            left: &Value,
                            right: &Value)
                            -> Result<(), RuntimeError> {
        match (left, right) {
            (Value::Type(_), Value::Type(_)) if operator.is_equality() => Ok(()),
            (Value::Type(_), Value::Type(_)) => {
                Err(RuntimeError::UnsupportedTypeOperation { operator: operator.to_string() })
            },
            (Value::String(_), Value::String(_)) | (Value::Array(_), Value::Array(_)) => Ok(()),
            _ if left.is_number_like() && right.is_number_like() => Ok(()),
            _ => Err(RuntimeError::TypeMismatch { operator: operator.to_string(),
                                                  left:     left.kind(),
                                                  right:    right.kind(), }),
        }
    }

    /// Structural equality.
    ///
    /// Numbers and booleans compare by numeric value, with booleans as `0` and
    /// `1`. Arrays are equal when they have the same length and their elements
    /// are pairwise equal. Values of incompatible kinds are never equal.
    #[must_use]
    pub fn eval_equals(left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Type(l), Value::Type(r)) => l == r,
            (Value::Array(l), Value::Array(r)) => {
                l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| Self::eval_equals(l, r))
            },
            _ => match (left.as_comparable_number(), right.as_comparable_number()) {
                (Some(l), Some(r)) => OrderedFloat(l) == OrderedFloat(r),
                _ => false,
            },
        }
    }

    /// Orders two values.
    ///
    /// Numbers and booleans order numerically, strings lexicographically.
    /// Arrays order element by element: the first unequal pair decides, and
    /// when one array is a prefix of the other the shorter sorts first.
    ///
    /// # Errors
    /// - `UnsupportedTypeOperation` when type tags would be ordered, including
    ///   inside arrays.
    /// - `TypeMismatch` when two elements at the same array position cannot be
    ///   ordered against each other.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use octane::{
    ///     ast::BoolOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let a = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
    /// let b = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(4)]);
    ///
    /// assert_eq!(Environment::eval_ordering(BoolOperator::LessThan, &a, &b).unwrap(),
    ///            Ordering::Less);
    /// assert_eq!(Environment::eval_ordering(BoolOperator::LessThan, &Value::Bool(false), &Value::Integer(1)).unwrap(),
    ///            Ordering::Less);
    /// ```
    pub fn eval_ordering(operator: BoolOperator,
                         left: &Value,
                         right: &Value)
                         -> Result<Ordering, RuntimeError> {
        match (left, right) {
            (Value::String(l), Value::String(r)) => Ok(l.cmp(r)),
            (Value::Array(l), Value::Array(r)) => {
                for (l, r) in l.iter().zip(r.iter()) {
                    let ordering = Self::eval_ordering(operator, l, r)?;
                    if ordering != Ordering::Equal {
                        return Ok(ordering);
                    }
                }
                Ok(l.len().cmp(&r.len()))
            },
            (Value::Type(_), _) | (_, Value::Type(_)) => {
                Err(RuntimeError::UnsupportedTypeOperation { operator: operator.to_string() })
            },
            _ => match (left.as_comparable_number(), right.as_comparable_number()) {
                (Some(l), Some(r)) => Ok(OrderedFloat(l).cmp(&OrderedFloat(r))),
                _ => Err(RuntimeError::TypeMismatch { operator: operator.to_string(),
                                                      left:     left.kind(),
                                                      right:    right.kind(), }),
            },
        }
    }
}
