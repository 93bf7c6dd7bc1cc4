use std::iter::Peekable;

use crate::{
    ast::{MathExpr, MathOperator, MathTerm},
    error::{Category, ParseError},
    interpreter::{
        lexer::{MathToken, tokenize_math},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Parses a fully parenthesized arithmetic expression.
///
/// The text must start with `(` and end with the matching `)`. Inside, terms
/// and operators alternate; there is no precedence between operators.
///
/// Grammar:
/// ```text
///     group := "(" term (operator term)* ")"
///     term  := number | "-" number | identifier | group
/// ```
///
/// # Errors
/// - `UnbalancedParentheses` for a missing outer wrap or a missing or extra
///   parenthesis.
/// - `UnknownOperator` when a name sits where an operator is expected.
/// - `MissingOperator` when two terms follow each other.
/// - `ExpectedOperand` when an operator or `)` sits where a term is expected.
///
/// # Example
/// ```
/// use octane::interpreter::parser::arithmetic::parse_arithmetic;
///
/// assert!(parse_arithmetic("(1 + (2 * x))").is_ok());
/// assert!(parse_arithmetic("1 + 1").is_err());
/// assert!(parse_arithmetic("(1 1)").is_err());
/// ```
pub fn parse_arithmetic(text: &str) -> ParseResult<MathExpr> {
    let tokens = tokenize_math(text)?;
    let mut tokens = tokens.iter().peekable();

    match tokens.next() {
        Some(MathToken::LParen) => {},
        _ => return Err(unbalanced("the expression must start with '('")),
    }

    let expr = parse_group(&mut tokens, 1)?;

    if let Some(token) = tokens.next() {
        return Err(unbalanced(&format!("unexpected {token} after the closing ')'")));
    }

    Ok(expr)
}

/// Parses the inside of a group, after its opening `(`, up to and including
/// the matching `)`.
fn parse_group<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<MathExpr>
    where I: Iterator<Item = &'a MathToken>
{
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                category: Category::Arithmetic, });
    }

    let first = parse_term(tokens, depth)?;
    let mut rest = Vec::new();

    loop {
        match tokens.next() {
            Some(MathToken::RParen) => return Ok(MathExpr { first, rest }),
            Some(token) => {
                let operator = as_operator(token)?;
                rest.push((operator, parse_term(tokens, depth)?));
            },
            None => return Err(unbalanced("missing ')'")),
        }
    }
}

fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<MathTerm>
    where I: Iterator<Item = &'a MathToken>
{
    match tokens.next() {
        Some(MathToken::Number(n)) => Ok(MathTerm::Number(*n)),
        Some(MathToken::Identifier(name)) => Ok(MathTerm::Variable(name.clone())),
        Some(MathToken::LParen) => Ok(MathTerm::Group(Box::new(parse_group(tokens, depth + 1)?))),
        Some(MathToken::Minus) => match tokens.next() {
            Some(MathToken::Number(n)) => Ok(MathTerm::Number(-n)),
            Some(token) => Err(expected_operand(&token.to_string())),
            None => Err(unbalanced("missing ')'")),
        },
        Some(token) => Err(expected_operand(&token.to_string())),
        None => Err(unbalanced("missing ')'")),
    }
}

/// Maps a token in operator position to its operator.
fn as_operator(token: &MathToken) -> ParseResult<MathOperator> {
    match token {
        MathToken::Plus => Ok(MathOperator::Add),
        MathToken::Minus => Ok(MathOperator::Sub),
        MathToken::Star => Ok(MathOperator::Mul),
        MathToken::Slash => Ok(MathOperator::Div),
        MathToken::Percent => Ok(MathOperator::Mod),
        MathToken::Caret => Ok(MathOperator::Pow),
        MathToken::RootOf => Ok(MathOperator::RootOf),
        MathToken::Identifier(name) => {
            Err(ParseError::UnknownOperator { operator: name.clone(),
                                              category: Category::Arithmetic, })
        },
        MathToken::Number(_) | MathToken::LParen | MathToken::RParen => {
            Err(ParseError::MissingOperator { found:    token.to_string(),
                                              category: Category::Arithmetic, })
        },
    }
}

fn unbalanced(details: &str) -> ParseError {
    ParseError::UnbalancedParentheses { details: details.to_string() }
}

fn expected_operand(found: &str) -> ParseError {
    ParseError::ExpectedOperand { found:    found.to_string(),
                                  category: Category::Arithmetic, }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_fold_without_precedence() {
        let expr = parse_arithmetic("(1 + 2 * 3)").unwrap();

        assert_eq!(expr.first, MathTerm::Number(1.0));
        assert_eq!(expr.rest,
                   vec![(MathOperator::Add, MathTerm::Number(2.0)),
                        (MathOperator::Mul, MathTerm::Number(3.0))]);
    }

    #[test]
    fn negative_literals_are_terms() {
        let expr = parse_arithmetic("(-2 - 1)").unwrap();

        assert_eq!(expr.first, MathTerm::Number(-2.0));
        assert_eq!(expr.rest, vec![(MathOperator::Sub, MathTerm::Number(1.0))]);
    }

    #[test]
    fn parenthesis_errors() {
        for text in ["(1 + 1", "1 + 1)", "((1 + 1)", "(1 + 1))", "(1 + (2 * (2 ^ 3) * 2)"] {
            assert!(matches!(parse_arithmetic(text),
                             Err(ParseError::UnbalancedParentheses { .. })),
                    "{text}");
        }
    }

    #[test]
    fn operator_errors() {
        assert!(matches!(parse_arithmetic("(1 x 1)"), Err(ParseError::UnknownOperator { .. })));
        assert!(matches!(parse_arithmetic("(1 1)"), Err(ParseError::MissingOperator { .. })));
        assert!(matches!(parse_arithmetic("()"), Err(ParseError::ExpectedOperand { .. })));
        assert!(matches!(parse_arithmetic("(1 & 1)"),
                         Err(ParseError::UnexpectedCharacter { .. })));
    }

    #[test]
    fn oversized_literals_are_rejected() {
        let text = format!("({} + 1)", "9".repeat(400));

        assert!(matches!(parse_arithmetic(&text),
                         Err(ParseError::NumberOutOfRange { category: Category::Arithmetic, .. })));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let text = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));

        assert!(matches!(parse_arithmetic(&text), Err(ParseError::NestingTooDeep { .. })));
    }
}
