use std::collections::HashSet;

use crate::{
    ast::{Expr, FunctionDef},
    diagnostics::Diagnostics,
    error::{LexicalError, ParseError},
    interpreter::{
        infer::{InferredType, infer_type, parameter_usage},
        lexer::Token,
        parser::core::{ParseResult, Parser, SyntaxTree},
    },
};

impl Parser<'_> {
    /// Parses every statement of the line.
    ///
    /// Each `;`-terminated statement becomes one [`SyntaxTree`]. Lexical
    /// errors are attached to the statement whose text contains them; errors
    /// after the last statement (or on a line without tokens) form a tree of
    /// their own with no root.
    ///
    /// # Parameters
    /// - `lexical_errors`: Errors reported by the lexer for the same line,
    ///   in column order.
    ///
    /// # Returns
    /// The trees in source order.
    pub fn parse_program(mut self, lexical_errors: Vec<LexicalError>) -> Vec<SyntaxTree> {
        let mut lexical_errors = lexical_errors.into_iter().peekable();
        let mut trees = Vec::new();

        while !self.at_end() {
            let end_column = self.statement_end_column();
            while let Some(error) = lexical_errors.next_if(|error| error.column <= end_column) {
                self.diagnostics.push(error);
            }

            let root = self.parse_statement();
            trees.push(SyntaxTree { root,
                                    diagnostics: std::mem::take(&mut self.diagnostics) });
        }

        let mut trailing = Diagnostics::default();
        for error in lexical_errors {
            trailing.push(error);
        }
        if !trailing.is_empty() {
            trees.push(SyntaxTree { root:        None,
                                    diagnostics: trailing, });
        }

        trees
    }

    /// Parses a single statement, including its terminating `;`.
    ///
    /// A statement is either a function declaration or an expression. After
    /// a syntax error the rest of the statement is skipped so the next one
    /// starts cleanly.
    ///
    /// Grammar: `statement := (function_declaration | expression) ";"`
    fn parse_statement(&mut self) -> Option<Expr> {
        let parsed = if self.check(&Token::Function) {
            self.parse_function_declaration().map(|()| None)
        } else {
            self.parse_expression().map(Some)
        };

        let root = match parsed {
            Ok(root) => root,
            Err(error) => {
                self.diagnostics.push(error);
                self.synchronize();
                return None;
            },
        };

        if self.eat(&Token::Semicolon) {
            return root;
        }

        self.unexpected(&Token::Semicolon.describe());
        self.synchronize();
        None
    }

    /// Parses a function declaration and enters it into the function table.
    ///
    /// Syntax:
    /// ```text
    ///     function <name>(<param>, ...) => <body>
    /// ```
    /// The function is declared only if the statement has no diagnostics so
    /// far, lexical ones included. Its return type and the type each
    /// parameter is used as are inferred here, once; a body that can never
    /// produce a value is rejected.
    ///
    /// # Errors
    /// Returns an error only when the parse-depth ceiling is hit inside the
    /// body; every other problem is recorded as a diagnostic.
    fn parse_function_declaration(&mut self) -> ParseResult<()> {
        self.advance();

        let column = self.column();
        let name = self.expect_identifier().map(|(name, _)| name).unwrap_or_default();
        if !name.is_empty() && self.functions.contains(&name) {
            self.diagnostics.push(ParseError::FunctionAlreadyDefined { name: name.clone(),
                                                                       column });
        }

        let params = self.parse_parameters();
        self.expect(&Token::Arrow);
        let body = self.parse_expression()?;

        if !self.diagnostics.is_empty() || !self.check(&Token::Semicolon) {
            return Ok(());
        }

        let bound: Vec<(String, InferredType)> =
            params.iter().map(|param| (param.clone(), InferredType::Any)).collect();
        let functions = &*self.functions;
        let return_type = infer_type(&body, functions, &bound);
        if return_type == InferredType::None {
            self.diagnostics.push(ParseError::UninferableBody { name, column });
            return Ok(());
        }

        let param_types = params.iter()
                                .map(|param| parameter_usage(&body, param, functions))
                                .collect();
        tracing::debug!(%name, %return_type, "declaring function");
        self.functions.declare(FunctionDef { name,
                                             params,
                                             param_types,
                                             return_type,
                                             body,
                                             column });
        Ok(())
    }

    /// Parses a parenthesized, comma-separated parameter list.
    ///
    /// Repeated names are reported; the list may be empty.
    fn parse_parameters(&mut self) -> Vec<String> {
        let mut params = Vec::new();
        let mut seen = HashSet::new();

        if !self.expect(&Token::LParen) {
            return params;
        }
        if self.eat(&Token::RParen) {
            return params;
        }

        loop {
            let column = self.column();
            let Some((param, _)) = self.expect_identifier() else {
                break;
            };
            if !seen.insert(param.clone()) {
                self.diagnostics.push(ParseError::DuplicateParameter { name: param.clone(),
                                                                       column });
            }
            params.push(param);
            if !self.eat(&Token::Comma) {
                break;
            }
        }

        self.expect(&Token::RParen);
        params
    }

    /// Returns the column of the `;` that ends the current statement, or
    /// `usize::MAX` if the statement runs to the end of the line.
    fn statement_end_column(&self) -> usize {
        self.lexemes
            .iter()
            .skip(self.pos)
            .find(|lexeme| lexeme.token == Token::Semicolon)
            .map_or(usize::MAX, |lexeme| lexeme.column)
    }
}
