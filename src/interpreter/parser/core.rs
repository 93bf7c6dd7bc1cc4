use crate::{
    error::{Category, ParseError},
    interpreter::lexer::{Spanned, Token, tokenize},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest nesting of brackets, arrays and parentheses the parsers accept.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A cursor over the tokens of one value or boolean expression.
///
/// Besides the tokens, the stream keeps the source text so that embedded
/// arithmetic can be re-read with the arithmetic lexer, and it tracks how deep
/// the parser has descended into nested brackets and arrays.
#[derive(Debug)]
pub struct TokenStream<'src> {
    source:   &'src str,
    tokens:   Vec<Spanned<Token>>,
    position: usize,
    depth:    usize,
}

impl<'src> TokenStream<'src> {
    /// Tokenizes `source` and positions the stream at the first token.
    ///
    /// # Errors
    /// Propagates lexer errors such as an unterminated string.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        Ok(Self { source,
                  tokens: tokenize(source)?,
                  position: 0,
                  depth: 0 })
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(token, _)| token)
    }

    /// Consumes and returns the next token with its span.
    pub fn advance(&mut self) -> Option<Spanned<Token>> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Returns the source text between two byte offsets.
    #[must_use]
    pub fn source_slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Describes the next token for an error message.
    #[must_use]
    pub fn describe_next(&self) -> String {
        self.peek().map_or_else(|| "end of input".to_string(), ToString::to_string)
    }

    /// Records entry into one more level of nesting.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] would be exceeded.
    pub fn descend(&mut self, category: Category) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    category });
        }
        self.depth += 1;
        Ok(())
    }

    /// Records leaving one level of nesting.
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
