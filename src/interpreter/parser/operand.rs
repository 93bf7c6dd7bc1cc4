use crate::{
    ast::{BoolOperator, Operand, Piece},
    error::{Category, ParseError},
    interpreter::{
        lexer::Token,
        parser::{
            arithmetic::parse_arithmetic,
            boolean::parse_bracketed,
            core::{ParseResult, TokenStream},
        },
        value::type_tag::TypeTag,
    },
};

/// Parses the text of a value expression.
///
/// Returns `None` for text that holds no tokens at all, which evaluates to the
/// empty string.
///
/// # Errors
/// - `MalformedConcatenation` when two values are not separated by exactly one
///   `.`.
/// - `UnbalancedParentheses` or `UnbalancedBrackets` for a stray closing
///   delimiter.
/// - Any error raised while parsing an embedded arithmetic, boolean or array
///   piece.
///
/// # Example
/// ```
/// use octane::interpreter::parser::operand::parse_expression;
///
/// let operand = parse_expression(r#""total: " . (1 + 1)"#).unwrap().unwrap();
/// assert_eq!(operand.pieces.len(), 2);
///
/// assert!(parse_expression("   ").unwrap().is_none());
/// assert!(parse_expression(r#""a" "b""#).is_err());
/// ```
pub fn parse_expression(text: &str) -> ParseResult<Option<Operand>> {
    let mut stream = TokenStream::new(text)?;
    if stream.is_at_end() {
        return Ok(None);
    }

    let operand = parse_operand(&mut stream, Category::Expression)?;

    match stream.peek() {
        None => Ok(Some(operand)),
        Some(Token::RParen) => {
            Err(ParseError::UnbalancedParentheses { details: "unexpected ')'".to_string() })
        },
        Some(Token::RBracket) => {
            Err(ParseError::UnbalancedBrackets { details: "unexpected ']'".to_string() })
        },
        Some(token) => {
            Err(ParseError::MalformedConcatenation { details: format!("expected '.' before {token}") })
        },
    }
}

/// Parses one operand: a piece, followed by any number of `.` and piece pairs.
///
/// Grammar: `operand := piece ("." piece)*`
///
/// # Parameters
/// - `stream`: Token stream positioned at the first piece.
/// - `category`: The grammar being parsed, used to attribute errors.
pub(in crate::interpreter::parser) fn parse_operand(stream: &mut TokenStream,
                                                    category: Category)
                                                    -> ParseResult<Operand> {
    let mut pieces = vec![parse_piece(stream, category, false)?];

    while let Some(Token::Dot) = stream.peek() {
        stream.advance();
        pieces.push(parse_piece(stream, category, true)?);
    }

    Ok(Operand { pieces })
}

/// Parses a single value token.
///
/// `after_dot` tells whether the piece follows a `.`, in which case a missing
/// piece is a concatenation error rather than a missing operand.
fn parse_piece(stream: &mut TokenStream,
               category: Category,
               after_dot: bool)
               -> ParseResult<Piece> {
    let found = stream.describe_next();

    let Some((token, span)) = stream.advance() else {
        return Err(if after_dot {
                       ParseError::MalformedConcatenation { details: "expression ends with '.'".to_string() }
                   } else {
                       ParseError::ExpectedOperand { found, category }
                   });
    };

    match token {
        Token::Text(text) => Ok(Piece::Text(text)),
        Token::Number(n) => Ok(Piece::Number(n)),
        Token::Word(word) => classify_word(word, category),
        Token::LParen => {
            let end = find_closing_paren(stream)?;
            let text = stream.source_slice(span.start, end);
            Ok(Piece::Arithmetic(parse_arithmetic(text)?))
        },
        Token::LBracket => Ok(Piece::Boolean(parse_bracketed(stream)?)),
        Token::Less => Ok(Piece::Array(parse_array(stream)?)),
        Token::Dot => Err(ParseError::MalformedConcatenation { details: "'.' must sit between two values".to_string() }),
        Token::RParen | Token::RBracket | Token::Greater | Token::Comma => {
            Err(ParseError::ExpectedOperand { found, category })
        },
    }
}

/// Sorts a bare word into a boolean literal, a type tag or a name.
fn classify_word(word: String, category: Category) -> ParseResult<Piece> {
    match word.as_str() {
        "true" => return Ok(Piece::Bool(true)),
        "false" => return Ok(Piece::Bool(false)),
        _ => {},
    }

    if word.starts_with('@') {
        return TypeTag::from_literal(&word).map(Piece::Type)
                                           .ok_or(ParseError::InvalidTypeTag { literal: word });
    }

    if BoolOperator::from_word(&word).is_some() {
        return Err(ParseError::ExpectedOperand { found: format!("operator '{word}'"),
                                                 category });
    }

    Ok(Piece::Word(word))
}

/// Skips to the `)` matching an already consumed `(` by depth counting and
/// returns the byte offset just past it.
fn find_closing_paren(stream: &mut TokenStream) -> ParseResult<usize> {
    let mut depth = 1_usize;

    while let Some((token, span)) = stream.advance() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(span.end);
                }
            },
            _ => {},
        }
    }

    Err(ParseError::UnbalancedParentheses { details: "missing ')'".to_string() })
}

/// Parses the elements of an array literal after its opening `<`, up to and
/// including the closing `>`.
///
/// Grammar: `array := "<" (operand ("," operand)*)? ">"`
fn parse_array(stream: &mut TokenStream) -> ParseResult<Vec<Operand>> {
    stream.descend(Category::Boolean)?;

    let mut elements = Vec::new();
    if let Some(Token::Greater) = stream.peek() {
        stream.advance();
        stream.ascend();

        return Ok(elements);
    }

    loop {
        elements.push(parse_operand(stream, Category::Boolean)?);

        match stream.advance() {
            Some((Token::Comma, _)) => {
                if let Some(Token::Greater) = stream.peek() {
                    return Err(malformed_array("trailing ',' before '>'"));
                }
            },
            Some((Token::Greater, _)) => break,
            Some((token, _)) => {
                return Err(malformed_array(&format!("expected ',' or '>' but found {token}")));
            },
            None => return Err(malformed_array("missing '>'")),
        }
    }

    stream.ascend();
    Ok(elements)
}

fn malformed_array(details: &str) -> ParseError {
    ParseError::MalformedArray { details: details.to_string() }
}
