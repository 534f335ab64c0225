use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a prefix operator applied to an operand, or a primary.
    ///
    /// The operand of a unary operator only absorbs binary operators that
    /// bind tighter than the unary one: `-2 ^ 2` is `-(2 ^ 2)` while
    /// `-2 * 3` is `(-2) * 3`, and `!a == b` is `!(a == b)` while `!a & b` is
    /// `(!a) & b`.
    ///
    /// Grammar: `unary := ("+" | "-" | "!") binary(p + 1) | primary`
    pub(super) fn parse_unary(&mut self) -> ParseResult<Expr> {
        let Some(op) = self.peek().and_then(token_to_unary_operator) else {
            return self.parse_primary();
        };

        let column = self.column();
        self.advance();
        let operand = self.nested(|parser| parser.parse_binary(op.precedence() + 1))?;

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(operand),
                           column })
    }

    /// Parses a primary expression, dispatching on the current token.
    ///
    /// Primaries are literals, constants, parenthesized expressions, vector
    /// literals, built-in calls, keyword-led forms and identifier-led forms.
    /// A token that cannot start an expression is reported, skipped and
    /// replaced by an [`Expr::Error`] placeholder.
    pub(super) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let column = self.column();
        let Some(token) = self.peek().cloned() else {
            self.unexpected("expression");
            return Ok(Expr::Error { column });
        };

        match token {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number { value, column })
            },
            Token::Str(value) => {
                self.advance();
                Ok(Expr::Str { value, column })
            },
            Token::Bool(value) => {
                self.advance();
                Ok(Expr::Bool { value, column })
            },
            Token::Constant(constant) => {
                self.advance();
                Ok(Expr::Constant { constant, column })
            },
            Token::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(&Token::RParen);
                Ok(Expr::Paren { expr: Box::new(expr),
                                 column })
            },
            Token::LBracket => self.parse_vector_literal(column),
            Token::Print => {
                self.advance();
                let expr = self.parse_call_argument()?;
                Ok(Expr::Print { expr: Box::new(expr),
                                 column })
            },
            Token::Math(function) => {
                self.advance();
                let argument = self.parse_call_argument()?;
                Ok(Expr::MathCall { function,
                                    argument: Box::new(argument),
                                    column })
            },
            Token::Log => {
                self.advance();
                let (base, argument) = self.parse_argument_pair()?;
                Ok(Expr::LogCall { base: Box::new(base),
                                   argument: Box::new(argument),
                                   column })
            },
            Token::Range => {
                self.advance();
                let (lower, upper) = self.parse_argument_pair()?;
                Ok(Expr::Range { lower: Box::new(lower),
                                 upper: Box::new(upper),
                                 column })
            },
            Token::Rand => {
                self.advance();
                self.expect(&Token::LParen);
                self.expect(&Token::RParen);
                Ok(Expr::Rand { column })
            },
            Token::Let => self.parse_let(column),
            Token::If => self.parse_if(column),
            Token::For => self.parse_for(column),
            Token::While => self.parse_while(column),
            Token::Identifier(name) => {
                self.advance();
                self.parse_identifier(name, column)
            },
            _ => {
                self.unexpected("expression");
                Ok(Expr::Error { column })
            },
        }
    }

    /// Parses what follows an identifier: a call, an index, a vector method
    /// or nothing (a plain variable reference).
    ///
    /// Grammar:
    /// ```text
    /// identifier_form := name "(" [expression ("," expression)*] ")"
    ///                  | name "[" expression "]"
    ///                  | name (".next" | ".current" | ".size") "(" ")"
    ///                  | name
    /// ```
    fn parse_identifier(&mut self, name: String, column: usize) -> ParseResult<Expr> {
        match self.peek() {
            Some(Token::LParen) => {
                self.advance();
                let mut arguments = Vec::new();
                if !self.eat(&Token::RParen) {
                    loop {
                        arguments.push(self.parse_expression()?);
                        if !self.eat(&Token::Comma) {
                            break;
                        }
                    }
                    self.expect(&Token::RParen);
                }
                Ok(Expr::FunctionCall { name,
                                        arguments,
                                        column })
            },
            Some(Token::LBracket) => {
                self.advance();
                let index = self.parse_expression()?;
                self.expect(&Token::RBracket);
                Ok(Expr::Index { name,
                                 index: Box::new(index),
                                 column })
            },
            Some(Token::Method(method)) => {
                let method = *method;
                self.advance();
                self.expect(&Token::LParen);
                self.expect(&Token::RParen);
                Ok(Expr::MethodCall { name,
                                      method,
                                      column })
            },
            _ => Ok(Expr::Variable { name, column }),
        }
    }

    /// Parses `[a, b, ...]`. The list may be empty.
    fn parse_vector_literal(&mut self, column: usize) -> ParseResult<Expr> {
        self.advance();
        let mut elements = Vec::new();
        if !self.eat(&Token::RBracket) {
            loop {
                elements.push(self.parse_expression()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
            self.expect(&Token::RBracket);
        }
        Ok(Expr::Vector { elements, column })
    }

    /// Parses a single parenthesized argument: `"(" expression ")"`.
    pub(super) fn parse_call_argument(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen);
        let argument = self.parse_expression()?;
        self.expect(&Token::RParen);
        Ok(argument)
    }

    /// Parses two parenthesized arguments: `"(" expression "," expression ")"`.
    pub(super) fn parse_argument_pair(&mut self) -> ParseResult<(Expr, Expr)> {
        self.expect(&Token::LParen);
        let first = self.parse_expression()?;
        self.expect(&Token::Comma);
        let second = self.parse_expression()?;
        self.expect(&Token::RParen);
        Ok((first, second))
    }
}

/// Maps a token to its corresponding unary operator.
///
/// # Example
/// ```
/// use hulk::{
///     ast::UnaryOperator,
///     interpreter::{lexer::Token, parser::unary::token_to_unary_operator},
/// };
///
/// assert_eq!(token_to_unary_operator(&Token::Minus), Some(UnaryOperator::Negate));
/// assert_eq!(token_to_unary_operator(&Token::Star), None);
/// ```
#[must_use]
pub const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}
