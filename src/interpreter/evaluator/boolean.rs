use crate::{
    ast::{BoolExpr, BoolOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        parser::boolean::parse_boolean,
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a bracketed boolean expression.
    ///
    /// All operators inside one pair of brackets share a precedence level and
    /// fold from the left, so `[a op1 b op2 c]` is `[[a op1 b] op2 c]`. A
    /// bracket holding a single operand yields that operand's truthiness.
    ///
    /// # Parameters
    /// - `text`: The expression, wrapped in one balanced pair of brackets.
    ///
    /// # Returns
    /// The result of the expression.
    ///
    /// # Example
    /// ```
    /// use octane::interpreter::{evaluator::core::Environment, value::core::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.set("name", Value::from("octane"));
    ///
    /// assert!(environment.evaluate_boolean(r#"[name equals "octane"]"#).unwrap());
    /// assert!(environment.evaluate_boolean("[[1 lessThan 2] and [3 greaterThan 2]]").unwrap());
    /// assert!(!environment.evaluate_boolean("[false or false]").unwrap());
    /// assert!(environment.evaluate_boolean("[name lessThan 3]").is_err());
    /// ```
    pub fn evaluate_boolean(&self, text: &str) -> EvalResult<bool> {
        let expr = parse_boolean(text)?;
        self.eval_bool_expr(&expr)
    }

    /// Evaluates a parsed boolean expression.
    ///
    /// Every operand is evaluated, left to right, before it is combined; there
    /// is no short-circuiting.
    pub fn eval_bool_expr(&self, expr: &BoolExpr) -> EvalResult<bool> {
        let mut result = self.eval_operand(&expr.first)?;

        for (step, (operator, operand)) in expr.rest.iter().enumerate() {
            let right = self.eval_operand(operand)?;

            if step > 0 && !right.is_number_like() {
                return Err(RuntimeError::InvalidChain { operator: operator.to_string(),
                                                        found:    right.kind(), }.into());
            }

            result = Value::Bool(Self::apply_bool_operator(*operator, &result, &right)?);
        }

        Ok(result.is_truthy())
    }

    /// Applies one comparison or logical operator to two evaluated operands.
    ///
    /// # Errors
    /// Fails if the operands are not compatible under `operator`, or if the
    /// operator orders values that cannot be ordered.
    pub fn apply_bool_operator(operator: BoolOperator,
                               left: &Value,
                               right: &Value)
                               -> Result<bool, RuntimeError> {
        Self::check_compatible(operator, left, right)?;

        let result = match operator {
            BoolOperator::And => Self::eval_and(left, right),
            BoolOperator::Or => Self::eval_or(left, right),
            BoolOperator::Equals => Self::eval_equals(left, right),
            BoolOperator::NotEquals => !Self::eval_equals(left, right),
            BoolOperator::LessThan => Self::eval_ordering(operator, left, right)?.is_lt(),
            BoolOperator::LessThanEquals => Self::eval_ordering(operator, left, right)?.is_le(),
            BoolOperator::GreaterThan => Self::eval_ordering(operator, left, right)?.is_gt(),
            BoolOperator::GreaterThanEquals => Self::eval_ordering(operator, left, right)?.is_ge(),
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Category, Error, ParseError};

    fn environment() -> Environment {
        let mut environment = Environment::new();
        environment.set("x", Value::Integer(5));
        environment.set("name", Value::from("octane"));
        environment.set("list", Value::from(vec![Value::Integer(1), Value::Integer(2)]));
        environment
    }

    fn check(environment: &Environment, text: &str, expected: bool) {
        assert_eq!(environment.evaluate_boolean(text).unwrap(), expected, "{text}");
    }

    #[test]
    fn comparisons() {
        let environment = environment();

        check(&environment, "[1 equals 1]", true);
        check(&environment, "[1 equals 1.0]", true);
        check(&environment, "[1 notEquals 2]", true);
        check(&environment, "[x lessThan 10]", true);
        check(&environment, "[x lessThanEquals 5]", true);
        check(&environment, "[x greaterThan 5]", false);
        check(&environment, "[x greaterThanEquals (2 + 3)]", true);
        check(&environment, "[\"apple\" lessThan \"banana\"]", true);
        check(&environment, "[name equals 'oct' . \"ane\"]", true);
        check(&environment, "[false lessThan true]", true);
        check(&environment, "[true equals 1]", true);
    }

    #[test]
    fn arrays() {
        let environment = environment();

        check(&environment, "[<1, 2, 3> equals <1, 2, 3>]", true);
        check(&environment, "[<1, 2, 3> lessThan <1, 2, 4>]", true);
        check(&environment, "[<1, 2> lessThan <1, 2, 3>]", true);
        check(&environment, "[list equals <1, 2>]", true);
        check(&environment, "[<> equals <>]", true);
        check(&environment, "[<\"a\", 1> notEquals <\"a\", 2>]", true);
    }

    #[test]
    fn type_tags() {
        let environment = environment();

        check(&environment, "[@Type:String equals @Type:String]", true);
        check(&environment, "[@Type:String notEquals @Type:Array]", true);

        let error = environment.evaluate_boolean("[@Type:String lessThan @Type:Array]")
                               .unwrap_err();
        assert!(matches!(error, Error::Runtime(RuntimeError::UnsupportedTypeOperation { .. })));

        let error = environment.evaluate_boolean("[@Type:Number and @Type:Number]").unwrap_err();
        assert!(matches!(error, Error::Runtime(RuntimeError::UnsupportedTypeOperation { .. })));

        assert!(matches!(environment.evaluate_boolean("[@Type:Float equals @Type:Float]"),
                         Err(Error::Parse(ParseError::InvalidTypeTag { .. }))));
    }

    #[test]
    fn truthiness() {
        let environment = environment();

        for value in ["1", "0", "-2.5", "(1 + 1)", "[false]"] {
            check(&environment, &format!("[{value} and true]"), value != "[false]");
            check(&environment, &format!("[{value} or true]"), true);
        }
        check(&environment, "[false and false]", false);
        check(&environment, "[false or false]", false);
        check(&environment, "[name]", true);
        check(&environment, "[false]", false);
        check(&environment, "[<>]", true);
    }

    #[test]
    fn chains_fold_left() {
        let environment = environment();

        check(&environment, "[\"hello\" equals \"hello\" equals true]", true);
        check(&environment, "[[true] and [true] and [true] and [true]]", true);
        check(&environment, "[[true] and [true] and [false] and [true]]", false);
        check(&environment, "[1 lessThan 2 equals 1]", true);
        check(&environment, "[false or false or true]", true);

        let error = environment.evaluate_boolean("[\"hello\" equals \"hello\" equals \"hello\"]")
                               .unwrap_err();
        assert_eq!(error.category(), Category::Boolean);
        assert!(matches!(error, Error::Runtime(RuntimeError::InvalidChain { .. })));
    }

    #[test]
    fn type_mismatches() {
        let environment = environment();

        for text in ["[name equals 1]",
                     "[name and true]",
                     "[list lessThan 1]",
                     "[<1> equals \"1\"]",
                     "[@Type:Number equals 1]"]
        {
            let error = environment.evaluate_boolean(text).unwrap_err();
            assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })), "{text}");
        }
    }

    #[test]
    fn embedded_errors_propagate() {
        let environment = environment();

        assert_eq!(environment.evaluate_boolean("[(1 / 0) equals 1]").unwrap_err().category(),
                   Category::Arithmetic);
        assert_eq!(environment.evaluate_boolean("[missing equals 1]").unwrap_err().category(),
                   Category::Expression);
        assert_eq!(environment.evaluate_boolean("[1 equals 1").unwrap_err().category(),
                   Category::Boolean);
    }
}
