use crate::{
    ast::{MathExpr, MathOperator, MathTerm},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        parser::arithmetic::parse_arithmetic,
    },
    util::num::format_decimal,
};

impl Environment {
    /// Evaluates a fully parenthesized arithmetic expression.
    ///
    /// Operators are applied strictly left to right with no precedence, so
    /// `(1 + 2 * 3)` is `9`. The result is returned in decimal form, which
    /// always carries a decimal point.
    ///
    /// # Parameters
    /// - `text`: The expression, wrapped in one balanced pair of parentheses.
    ///
    /// # Returns
    /// The canonical decimal text of the result, such as `"2.0"`.
    ///
    /// # Example
    /// ```
    /// use octane::interpreter::evaluator::core::Environment;
    ///
    /// let environment = Environment::new();
    ///
    /// assert_eq!(environment.calculate("(1 + 1)").unwrap(), "2.0");
    /// assert_eq!(environment.calculate("(10 * 2 * ((1 + 1) rootOf 25) + 1)").unwrap(),
    ///            "101.0");
    /// assert!(environment.calculate("(1 / 0)").is_err());
    /// ```
    pub fn calculate(&self, text: &str) -> EvalResult<String> {
        let expr = parse_arithmetic(text)?;
        Ok(format_decimal(self.eval_math(&expr)?))
    }

    /// Folds a parsed arithmetic expression to its numeric value.
    pub fn eval_math(&self, expr: &MathExpr) -> EvalResult<f64> {
        let mut result = self.eval_term(&expr.first)?;

        for (operator, term) in &expr.rest {
            let right = self.eval_term(term)?;
            result = apply(*operator, result, right)?;
        }

        Ok(result)
    }

    fn eval_term(&self, term: &MathTerm) -> EvalResult<f64> {
        match term {
            MathTerm::Number(n) => Ok(*n),
            MathTerm::Group(expr) => self.eval_math(expr),
            MathTerm::Variable(name) => {
                let value =
                    self.get(name)
                        .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?;

                Ok(value.as_number()
                        .ok_or_else(|| RuntimeError::NonNumericOperand { name:  name.clone(),
                                                                         found: value.kind(), })?)
            },
        }
    }
}

/// Applies one arithmetic operator.
///
/// # Errors
/// - `DivisionByZero` for `/` or `%` with a zero divisor.
/// - `InvalidRoot` for `0 rootOf x`.
/// - `NonFiniteResult` if the result is infinite or NaN.
#[allow(clippy::float_cmp)]
fn apply(operator: MathOperator, left: f64, right: f64) -> Result<f64, RuntimeError> {
    let result = match operator {
        MathOperator::Add => left + right,
        MathOperator::Sub => left - right,
        MathOperator::Mul => left * right,
        MathOperator::Div | MathOperator::Mod if right == 0.0 => {
            return Err(RuntimeError::DivisionByZero { operator: operator.to_string() });
        },
        MathOperator::Div => left / right,
        MathOperator::Mod => floored_mod(left, right),
        MathOperator::Pow => left.powf(right),
        MathOperator::RootOf => root(left, right)?,
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(RuntimeError::NonFiniteResult)
    }
}

/// Modulo whose result takes the sign of the divisor.
fn floored_mod(left: f64, right: f64) -> f64 {
    let remainder = left % right;
    if remainder != 0.0 && (remainder < 0.0) != (right < 0.0) {
        remainder + right
    } else {
        remainder
    }
}

/// The `degree`-th root of `radicand`.
///
/// Odd roots of negative numbers are real; even roots of negative numbers are
/// NaN and rejected by the caller.
#[allow(clippy::float_cmp)]
fn root(degree: f64, radicand: f64) -> Result<f64, RuntimeError> {
    if degree == 0.0 {
        return Err(RuntimeError::InvalidRoot);
    }
    if degree == 2.0 {
        return Ok(radicand.sqrt());
    }
    if degree == 3.0 {
        return Ok(radicand.cbrt());
    }

    let is_odd_integer = degree.fract() == 0.0 && degree % 2.0 != 0.0;
    if radicand < 0.0 && is_odd_integer {
        Ok(-(-radicand).powf(degree.recip()))
    } else {
        Ok(radicand.powf(degree.recip()))
    }
}
