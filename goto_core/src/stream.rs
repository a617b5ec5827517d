//! Token stream with one-token lookahead

use alloc::vec::Vec;

use crate::token::Token;

/// Cursor over a scanned expression
///
/// `peek` and `pop` are total: once the tokens run out they yield
/// `Token::Eof` forever instead of failing or wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The current token, without consuming it
    pub fn peek(&self) -> Token {
        self.tokens.get(self.position).copied().unwrap_or(Token::Eof)
    }

    /// The current token, advancing past it
    pub fn pop(&mut self) -> Token {
        let token = self.peek();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// True while unconsumed tokens remain
    pub fn has_tokens_remaining(&self) -> bool {
        self.position < self.tokens.len()
    }
}
