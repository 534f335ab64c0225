use std::mem::discriminant;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::Parser},
};

impl Parser<'_> {
    /// Returns the current token without consuming it.
    pub(super) fn peek(&self) -> Option<&Token> {
        self.lexemes.get(self.pos).map(|lexeme| &lexeme.token)
    }

    /// Returns the column of the current token, or the end-of-line column.
    pub(super) fn column(&self) -> usize {
        self.lexemes.get(self.pos).map_or(self.end_column, |lexeme| lexeme.column)
    }

    /// Returns `true` once every token has been consumed.
    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    /// Consumes the current token.
    pub(super) fn advance(&mut self) -> Option<Token> {
        let token = self.lexemes.get(self.pos).map(|lexeme| lexeme.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Returns `true` if the current token is of the same kind as `expected`.
    ///
    /// Payloads are ignored, so `Token::Identifier(String::new())` matches any
    /// identifier.
    pub(super) fn check(&self, expected: &Token) -> bool {
        self.peek().is_some_and(|token| discriminant(token) == discriminant(expected))
    }

    /// Consumes the current token if it is of the same kind as `expected`.
    pub(super) fn eat(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `expected` or reports that it is missing.
    ///
    /// On a mismatch the unexpected token is skipped (unless it ends the
    /// statement) and a syntax error naming both tokens is recorded; parsing
    /// then carries on as if `expected` had been there.
    pub(super) fn expect(&mut self, expected: &Token) -> bool {
        if self.eat(expected) {
            return true;
        }
        self.unexpected(&expected.describe());
        false
    }

    /// Consumes an identifier, reporting a syntax error if there is none.
    ///
    /// # Returns
    /// The identifier and its column, or `None` after an error.
    pub(super) fn expect_identifier(&mut self) -> Option<(String, usize)> {
        let column = self.column();
        if let Some(Token::Identifier(name)) = self.peek() {
            let name = name.clone();
            self.pos += 1;
            return Some((name, column));
        }
        self.unexpected("identifier");
        None
    }

    /// Records an unexpected-token error at the current position and skips
    /// the offending token unless it is a `;`.
    pub(super) fn unexpected(&mut self, expected: &str) {
        let column = self.column();
        let expected = expected.to_string();
        let Some(token) = self.peek() else {
            self.diagnostics.push(ParseError::UnexpectedEndOfInput { expected, column });
            return;
        };

        let ends_statement = *token == Token::Semicolon;
        let found = token.describe();
        self.diagnostics.push(ParseError::UnexpectedToken { found,
                                                            expected,
                                                            column });
        if !ends_statement {
            self.pos += 1;
        }
    }

    /// Skips past the next `;`, or to the end of the line.
    pub(super) fn synchronize(&mut self) {
        while let Some(token) = self.advance() {
            if token == Token::Semicolon {
                break;
            }
        }
    }
}
