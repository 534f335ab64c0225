use crate::{
    ast::{Expr, ForSource, LetBinding},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a `let` expression.
    ///
    /// Syntax:
    /// ```text
    ///     let <name> = <expr> {, <name> = <expr>} in <body>
    /// ```
    /// Each value is parsed in order, so a later value may refer to an
    /// earlier name of the same `let`.
    ///
    /// # Parameters
    /// - `column`: Column of the `let` keyword.
    pub(super) fn parse_let(&mut self, column: usize) -> ParseResult<Expr> {
        self.advance();

        let mut bindings = Vec::new();
        loop {
            let (name, name_column) =
                self.expect_identifier().unwrap_or_else(|| (String::new(), self.column()));
            self.expect(&Token::Equals);
            let value = self.parse_expression()?;
            bindings.push(LetBinding { name,
                                       value,
                                       column: name_column });
            if !self.eat(&Token::Comma) {
                break;
            }
        }

        self.expect(&Token::In);
        let body = self.parse_expression()?;

        Ok(Expr::LetIn { bindings,
                         body: Box::new(body),
                         column })
    }

    /// Parses an `if` expression with optional `elif` branches.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) <expr>
    ///     elif (<condition>) <expr>
    ///     else <expr>
    /// ```
    /// The `else` branch is mandatory: every `if` produces a value.
    pub(super) fn parse_if(&mut self, column: usize) -> ParseResult<Expr> {
        self.advance();
        let condition = self.parse_call_argument()?;
        let then_branch = self.parse_expression()?;

        let mut elif_branches = Vec::new();
        while self.eat(&Token::Elif) {
            let condition = self.parse_call_argument()?;
            let body = self.parse_expression()?;
            elif_branches.push((condition, body));
        }

        let else_column = self.column();
        let else_branch = if self.expect(&Token::Else) {
            self.parse_expression()?
        } else {
            Expr::Error { column: else_column }
        };

        Ok(Expr::If { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      elif_branches,
                      else_branch: Box::new(else_branch),
                      column })
    }

    /// Parses a `for` loop.
    ///
    /// Syntax:
    /// ```text
    ///     for (<name> in range(<lower>, <upper>)) <body>
    ///     for (<name> in <vector>) <body>
    /// ```
    pub(super) fn parse_for(&mut self, column: usize) -> ParseResult<Expr> {
        self.advance();
        self.expect(&Token::LParen);
        let var = self.expect_identifier().map(|(name, _)| name).unwrap_or_default();
        self.expect(&Token::In);

        let source_column = self.column();
        let source = match self.peek() {
            Some(Token::Range) => {
                self.advance();
                let (lower, upper) = self.parse_argument_pair()?;
                ForSource::Range { lower: Box::new(lower),
                                   upper: Box::new(upper) }
            },
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                ForSource::Vector { name,
                                    column: source_column }
            },
            _ => {
                self.unexpected("'range' or a vector name");
                ForSource::Vector { name:   String::new(),
                                    column: source_column, }
            },
        };

        self.expect(&Token::RParen);
        let body = self.parse_expression()?;

        Ok(Expr::For { var,
                       source,
                       body: Box::new(body),
                       column })
    }

    /// Parses a `while` loop.
    ///
    /// Syntax:
    /// ```text
    ///     while (<condition>) <body>
    /// ```
    pub(super) fn parse_while(&mut self, column: usize) -> ParseResult<Expr> {
        self.advance();
        let condition = self.parse_call_argument()?;
        let body = self.parse_expression()?;

        Ok(Expr::While { condition: Box::new(condition),
                         body: Box::new(body),
                         column })
    }
}
