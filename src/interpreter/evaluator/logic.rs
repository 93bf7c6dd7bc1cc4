use crate::interpreter::{evaluator::core::Environment, value::core::Value};

impl Environment {
    /// Logical `and` over the truthiness of both operands.
    ///
    /// Both operands are always evaluated before this is called; there is no
    /// short-circuiting.
    #[must_use]
    pub const fn eval_and(left: &Value, right: &Value) -> bool {
        left.is_truthy() && right.is_truthy()
    }

    /// Logical `or` over the truthiness of both operands.
    #[must_use]
    pub const fn eval_or(left: &Value, right: &Value) -> bool {
        left.is_truthy() || right.is_truthy()
    }
}
