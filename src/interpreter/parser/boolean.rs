use crate::{
    ast::{BoolExpr, BoolOperator},
    error::{Category, ParseError},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            operand::parse_operand,
        },
    },
};

/// Parses a complete boolean expression.
///
/// The text must be exactly one bracketed expression; nothing may precede the
/// opening `[` or follow the matching `]`.
///
/// Grammar:
/// ```text
///     boolean  := "[" operand (operator operand)* "]"
///     operator := "equals" | "notEquals" | "lessThan" | "lessThanEquals"
///               | "greaterThan" | "greaterThanEquals" | "and" | "or"
/// ```
///
/// # Errors
/// - `UnbalancedBrackets` for a missing, extra or trailing bracket.
/// - `UnknownOperator` for a word that is not an operator in operator
///   position.
/// - `MissingOperator` when two operands follow each other.
/// - Any error raised while parsing the operands.
///
/// # Example
/// ```
/// use octane::interpreter::parser::boolean::parse_boolean;
///
/// let expr = parse_boolean("[[x lessThan 3] and true]").unwrap();
/// assert_eq!(expr.rest.len(), 1);
///
/// assert!(parse_boolean("[true]]").is_err());
/// assert!(parse_boolean("[true invalid true]").is_err());
/// ```
pub fn parse_boolean(text: &str) -> ParseResult<BoolExpr> {
    let mut stream = TokenStream::new(text)?;

    match stream.advance() {
        Some((Token::LBracket, _)) => {},
        _ => return Err(unbalanced("the expression must start with '['")),
    }

    let expr = parse_bracketed(&mut stream)?;

    if !stream.is_at_end() {
        return Err(unbalanced(&format!("unexpected {} after the closing ']'",
                                       stream.describe_next())));
    }

    Ok(expr)
}

/// Parses the inside of a bracketed expression, after its opening `[`, up to
/// and including the matching `]`.
pub(in crate::interpreter::parser) fn parse_bracketed(stream: &mut TokenStream)
                                                      -> ParseResult<BoolExpr> {
    stream.descend(Category::Boolean)?;

    let first = parse_operand(stream, Category::Boolean)?;
    let mut rest = Vec::new();

    loop {
        let found = stream.describe_next();

        match stream.advance() {
            Some((Token::RBracket, _)) => break,
            Some((Token::Word(word), _)) => {
                let operator = match BoolOperator::from_word(&word) {
                    Some(operator) => operator,
                    None if word == "true" || word == "false" => {
                        return Err(missing_operator(found));
                    },
                    None => {
                        return Err(ParseError::UnknownOperator { operator: word,
                                                                 category: Category::Boolean, });
                    },
                };
                rest.push((operator, parse_operand(stream, Category::Boolean)?));
            },
            Some((Token::Text(_) | Token::Number(_) | Token::LBracket | Token::LParen | Token::Less,
                  _)) => return Err(missing_operator(found)),
            Some((Token::RParen, _)) => {
                return Err(ParseError::UnbalancedParentheses { details: "unexpected ')'".to_string() });
            },
            Some((Token::Greater | Token::Comma | Token::Dot, _)) => {
                return Err(ParseError::MalformedArray { details: format!("stray {found}") });
            },
            None => return Err(unbalanced("missing ']'")),
        }
    }

    stream.ascend();
    Ok(BoolExpr { first, rest })
}

fn missing_operator(found: String) -> ParseError {
    ParseError::MissingOperator { found,
                                  category: Category::Boolean }
}

fn unbalanced(details: &str) -> ParseError {
    ParseError::UnbalancedBrackets { details: details.to_string() }
}
