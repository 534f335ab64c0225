use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a chain of binary operators by precedence climbing.
    ///
    /// Operators whose binding power is at least `min_precedence` are folded
    /// into the result. Left-associative operators parse their right operand
    /// one level higher, so `a - b - c` groups as `(a - b) - c`; `^` parses it
    /// at the same level, so `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    ///
    /// Grammar: `binary(p) := unary (op binary(q))*` where `op` binds at
    /// least `p`.
    ///
    /// # Parameters
    /// - `min_precedence`: The weakest binding power accepted at this level.
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree, or the single operand if no operator follows.
    pub(super) fn parse_binary(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.peek().and_then(token_to_binary_operator) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }

            let column = self.column();
            self.advance();

            let next_min = if op.is_right_associative() {
                precedence
            } else {
                precedence + 1
            };
            let right = self.nested(|parser| parser.parse_binary(next_min))?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column };
        }

        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (arithmetic, `@`, comparisons, `&` and `|`) and `None` for all other
/// tokens.
///
/// # Example
/// ```
/// use hulk::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::At), Some(BinaryOperator::Concat));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::At => Some(BinaryOperator::Concat),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
