use crate::error::{LexicalError, ParseError, RuntimeError};

/// A single reported problem, tagged with the phase that found it.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Reported by the lexer.
    Lexical(LexicalError),
    /// Reported by the parser.
    Syntax(ParseError),
    /// Reported by the evaluator.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Returns the 1-based column the diagnostic points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Lexical(e) => e.column,
            Self::Syntax(e) => e.column(),
            Self::Runtime(e) => e.column(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl From<LexicalError> for Diagnostic {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

/// An ordered, append-only list of diagnostics.
///
/// Diagnostics are kept in the order they were reported. The front end shows
/// only the first one of a failing statement, see [`Diagnostics::take_first`].
///
/// # Example
/// ```
/// use hulk::{
///     diagnostics::Diagnostics,
///     error::RuntimeError,
/// };
///
/// let mut diagnostics = Diagnostics::default();
/// diagnostics.push(RuntimeError::UndefinedVariable { name:   "x".into(),
///                                                    column: 1, });
/// diagnostics.push(RuntimeError::ConcatenationType { column: 3 });
///
/// let first = diagnostics.take_first().unwrap();
/// assert_eq!(first.to_string(),
///            "! SEMANTIC ERROR: Variable \"x\" is not defined (column 1)");
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        tracing::debug!(%diagnostic, "diagnostic recorded");
        self.entries.push(diagnostic);
    }

    /// Removes and returns the most recently added diagnostic.
    pub fn pop(&mut self) -> Option<Diagnostic> {
        self.entries.pop()
    }

    /// Returns the first diagnostic and clears the whole list.
    ///
    /// Later diagnostics of the same statement are discarded.
    pub fn take_first(&mut self) -> Option<Diagnostic> {
        let mut drained = self.entries.drain(..);
        drained.next()
    }

    /// Returns the first diagnostic without removing anything.
    #[must_use]
    pub fn first(&self) -> Option<&Diagnostic> {
        self.entries.first()
    }

    /// Returns the most recently added diagnostic.
    #[must_use]
    pub fn last(&self) -> Option<&Diagnostic> {
        self.entries.last()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been reported.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Returns every diagnostic rendered as its user-facing message.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
