use std::collections::HashMap;

use crate::{error::Error, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an `Error`
/// describing the failure, so that grammar and evaluation errors from nested
/// expressions can be propagated with `?`.
pub type EvalResult<T> = Result<T, Error>;

/// Stores the variables of one interpreter session.
///
/// This is the single flat scope of the language. The evaluators only read it;
/// the assignment statement is the only writer.
///
/// ## Usage
///
/// `Environment` is created once per session. The evaluation entry points
/// (`calculate`, `evaluate_expression` and `evaluate_boolean`) are methods on
/// it, so every evaluator resolves names against the same bindings.
///
/// # Example
/// ```
/// use octane::interpreter::{evaluator::core::Environment, value::core::Value};
///
/// let mut environment = Environment::new();
/// environment.set("x", Value::Integer(2));
///
/// assert_eq!(environment.calculate("(x * 3)").unwrap(), "6.0");
/// assert_eq!(environment.evaluate_expression("x").unwrap(), Value::Integer(2));
/// assert!(environment.evaluate_boolean("[x lessThan 3]").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Returns `true` if the variable is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
