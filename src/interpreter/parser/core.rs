use crate::{
    ast::Expr,
    config::Limits,
    diagnostics::Diagnostics,
    error::ParseError,
    interpreter::{environment::FunctionTable, lexer::Lexeme},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the parser.
///
/// Only unrecoverable conditions travel through the `Err` side; a misplaced
/// token is reported into the statement's diagnostics and parsing goes on.
pub type ParseResult<T> = Result<T, ParseError>;

/// The outcome of parsing one `;`-terminated statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    /// The parsed expression, or `None` for a function declaration or a
    /// statement that could not be parsed at all.
    pub root:        Option<Expr>,
    /// Lexical, syntactic and declaration errors found in the statement.
    pub diagnostics: Diagnostics,
}

impl SyntaxTree {
    /// Returns `true` if the statement can be evaluated.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Recursive-descent parser with precedence climbing for operators.
///
/// The parser consumes the lexemes of one source line and produces one
/// [`SyntaxTree`] per statement. Function declarations are entered into the
/// session's [`FunctionTable`] as soon as they parse cleanly, so later
/// statements on the same line can call them.
pub struct Parser<'a> {
    pub(super) lexemes:     Vec<Lexeme>,
    pub(super) pos:         usize,
    pub(super) depth:       usize,
    pub(super) limits:      Limits,
    pub(super) functions:   &'a mut FunctionTable,
    pub(super) diagnostics: Diagnostics,
    pub(super) end_column:  usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `lexemes`.
    ///
    /// # Parameters
    /// - `lexemes`: The tokens of the line.
    /// - `end_column`: The column just past the last character of the line,
    ///   reported by errors at end of input.
    /// - `functions`: The session's function table.
    /// - `limits`: Supplies the parse-depth ceiling.
    #[must_use]
    pub fn new(lexemes: Vec<Lexeme>,
               end_column: usize,
               functions: &'a mut FunctionTable,
               limits: Limits)
               -> Self {
        Self { lexemes,
               pos: 0,
               depth: 0,
               limits,
               functions,
               diagnostics: Diagnostics::default(),
               end_column }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It starts at the
    /// lowest binding power, logical `&` / `|`, and climbs from there.
    ///
    /// Grammar: `expression := binary(1)`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.nested(|parser| parser.parse_binary(1))
    }

    /// Runs one level of recursive descent under the parse-depth ceiling.
    ///
    /// # Errors
    /// Returns [`ParseError::DepthExceeded`] once nesting reaches
    /// [`Limits::max_parse_depth`].
    pub(super) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= self.limits.max_parse_depth {
            tracing::debug!(depth = self.depth, "parse depth exceeded");
            return Err(ParseError::DepthExceeded { limit:  self.limits.max_parse_depth,
                                                   column: self.column(), });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| parse(self));
        self.depth -= 1;
        result
    }
}
