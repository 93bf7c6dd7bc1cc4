use crate::{
    ast::{Operand, Piece},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        parser::operand::parse_expression,
        value::core::Value,
    },
    util::num::{format_decimal, parse_numeric_literal},
};

impl Environment {
    /// Evaluates a value expression.
    ///
    /// A lone variable, boolean, array or type tag yields its typed value. A
    /// lone number or any concatenation of several pieces is assembled as text
    /// and then read back: text that is a plain numeral becomes a number,
    /// anything else stays a string. Empty text yields the empty string.
    ///
    /// # Parameters
    /// - `text`: The expression, e.g. `"total: " . (x + 1)`.
    ///
    /// # Returns
    /// The resulting value.
    ///
    /// # Example
    /// ```
    /// use octane::interpreter::{evaluator::core::Environment, value::core::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.set("name", Value::from("world"));
    ///
    /// assert_eq!(environment.evaluate_expression(r#""hello " . name"#).unwrap(),
    ///            Value::from("hello world"));
    /// assert_eq!(environment.evaluate_expression("(2 * (1 + 1))").unwrap(),
    ///            Value::Integer(4));
    /// assert_eq!(environment.evaluate_expression("1 . 2").unwrap(), Value::Integer(12));
    /// assert!(environment.evaluate_expression("unknown").is_err());
    /// ```
    pub fn evaluate_expression(&self, text: &str) -> EvalResult<Value> {
        match parse_expression(text)? {
            Some(operand) => self.eval_operand(&operand),
            None => Ok(Value::from("")),
        }
    }

    /// Evaluates a parsed operand.
    pub fn eval_operand(&self, operand: &Operand) -> EvalResult<Value> {
        if let [piece] = operand.pieces.as_slice()
           && let Some(value) = self.eval_typed_piece(piece)?
        {
            return Ok(value);
        }

        let mut text = String::new();
        for piece in &operand.pieces {
            text.push_str(&self.piece_text(piece)?);
        }

        Ok(reinterpret(text))
    }

    /// Evaluates a piece that keeps its own type when it stands alone.
    ///
    /// Returns `None` for pieces that are always assembled as text.
    fn eval_typed_piece(&self, piece: &Piece) -> EvalResult<Option<Value>> {
        let value = match piece {
            Piece::Word(name) => self.get(name).cloned(),
            Piece::Bool(b) => Some(Value::Bool(*b)),
            Piece::Type(tag) => Some(Value::Type(*tag)),
            Piece::Boolean(expr) => Some(Value::Bool(self.eval_bool_expr(expr)?)),
            Piece::Array(elements) => Some(self.eval_array(elements)?),
            Piece::Text(_) | Piece::Number(_) | Piece::Arithmetic(_) => None,
        };
        Ok(value)
    }

    /// Produces the text a piece adds to a concatenation.
    fn piece_text(&self, piece: &Piece) -> EvalResult<String> {
        match piece {
            Piece::Text(text) => Ok(text.clone()),
            Piece::Number(n) => Ok(Value::from_number(*n).to_string()),
            Piece::Arithmetic(expr) => Ok(format_decimal(self.eval_math(expr)?)),
            Piece::Word(word) => self.word_text(word),
            Piece::Bool(_) | Piece::Type(_) | Piece::Boolean(_) | Piece::Array(_) => {
                let value = self.eval_typed_piece(piece)?;
                Ok(value.map(|value| value.to_string()).unwrap_or_default())
            },
        }
    }

    /// Resolves a bare word: first as a variable, then as a numeral.
    fn word_text(&self, word: &str) -> EvalResult<String> {
        if let Some(value) = self.get(word) {
            return Ok(value.to_string());
        }
        if let Some(number) = parse_numeric_literal(word) {
            return Ok(Value::from_number(number).to_string());
        }
        Err(RuntimeError::BadArgument { token: word.to_string() }.into())
    }

    /// Evaluates the elements of an array literal.
    pub fn eval_array(&self, elements: &[Operand]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval_operand(element))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }
}

/// Reads assembled text back as a number when it is a plain numeral.
fn reinterpret(text: String) -> Value {
    match parse_numeric_literal(&text) {
        Some(number) => Value::from_number(number),
        None => Value::String(text),
    }
}
