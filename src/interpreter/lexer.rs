use std::ops::Range;

use logos::Logos;

use crate::error::{Category, ParseError};

/// A token paired with the byte range it was read from.
pub type Spanned<T> = (T, Range<usize>);

/// Represents a lexical token of a value or boolean expression.
///
/// Structural delimiters always form their own token, so they may sit flush
/// against their neighbours. Everything else that is not whitespace is gathered
/// into a single [`Token::Word`], which is why two bare words without a
/// separator merge into one.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`, the concatenation operator.
    #[token(".")]
    Dot,
    /// A quoted string, stored without its quotes.
    #[regex(r#""[^"]*""#, unquote)]
    #[regex(r"'[^']*'", unquote)]
    Text(String),
    /// Numeric literal tokens, such as `42`, `-3` or `1.5`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_float, priority = 3)]
    Number(f64),
    /// Any other run of non-whitespace, non-structural characters: variable
    /// names, keywords, operators and type tags.
    #[regex(r#"[^\s\[\]()<>,.'"]+"#, |lex| lex.slice().to_string())]
    Word(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::Comma => write!(f, "','"),
            Self::Dot => write!(f, "'.'"),
            Self::Text(text) => write!(f, "string \"{text}\""),
            Self::Number(n) => write!(f, "number '{n}'"),
            Self::Word(word) => write!(f, "'{word}'"),
        }
    }
}

/// Represents a lexical token of an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum MathToken {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Unsigned numeric literals, such as `3` or `3.33`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_math_float)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `rootOf`
    #[token("rootOf")]
    RootOf,
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl std::fmt::Display for MathToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Number(n) => write!(f, "number '{n}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Caret => write!(f, "'^'"),
            Self::RootOf => write!(f, "'rootOf'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
        }
    }
}

/// Splits value or boolean expression text into tokens.
///
/// # Errors
/// - `UnterminatedString` if a quote is never closed.
/// - `UnexpectedCharacter` for any text no token can start with.
///
/// # Example
/// ```
/// use octane::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize(r#""a".x"#).unwrap()
///                                              .into_iter()
///                                              .map(|(token, _)| token)
///                                              .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Text("a".to_string()), Token::Dot, Token::Word("x".to_string())]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned<Token>>, ParseError> {
    let mut tokens = Vec::new();

    for (token, span) in Token::lexer(source).spanned() {
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let found = &source[span];
                return Err(match found.chars().next() {
                               Some(quote @ ('"' | '\'')) => {
                                   ParseError::UnterminatedString { quote }
                               },
                               _ if is_overflowing_numeral(found) => {
                                   ParseError::NumberOutOfRange { literal:  found.to_string(),
                                                                  category: Category::Expression, }
                               },
                               _ => ParseError::UnexpectedCharacter { found:    found.to_string(),
                                                                      category: Category::Expression, },
                           });
            },
        }
    }

    Ok(tokens)
}

/// Splits arithmetic expression text into tokens.
///
/// # Errors
/// - `UnexpectedCharacter` for any character that is not part of the
///   arithmetic grammar.
pub fn tokenize_math(source: &str) -> Result<Vec<MathToken>, ParseError> {
    let mut tokens = Vec::new();

    for (token, span) in MathToken::lexer(source).spanned() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let found = source[span].to_string();
                if is_overflowing_numeral(&found) {
                    return Err(ParseError::NumberOutOfRange { literal:  found,
                                                              category: Category::Arithmetic, });
                }
                return Err(ParseError::UnexpectedCharacter { found,
                                                             category: Category::Arithmetic, });
            },
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|n: &f64| n.is_finite())
}

/// Parses an unsigned arithmetic literal from the current token slice.
fn parse_math_float(lex: &logos::Lexer<MathToken>) -> Option<f64> {
    lex.slice().parse().ok().filter(|n: &f64| n.is_finite())
}

/// Whether a rejected slice is a numeral that only failed by overflowing.
fn is_overflowing_numeral(slice: &str) -> bool {
    slice.bytes().all(|b| b.is_ascii_digit() || b == b'-' || b == b'.')
    && slice.parse::<f64>().is_ok_and(f64::is_infinite)
}

/// Strips the surrounding quotes from a string literal.
fn unquote(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
