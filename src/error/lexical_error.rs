/// The reason a run of characters could not be turned into a token.
///
/// This is also the error type of the logos-generated lexer, so it must be
/// constructible by default for characters no pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexicalErrorKind {
    /// No token pattern matches the character.
    #[default]
    InvalidToken,
    /// A digit run directly followed by identifier characters, such as `3x`.
    MalformedNumber,
    /// A `.name` suffix that is not one of `next`, `current` or `size`.
    UnknownMethod,
    /// A string literal without its closing quote.
    UnterminatedString,
    /// A backslash escape other than `\n`, `\t`, `\"` or `\\`.
    InvalidEscape(char),
}

/// A lexical error together with the offending text and its 1-based column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    /// What went wrong.
    pub kind:   LexicalErrorKind,
    /// The source text that could not be tokenized.
    pub text:   String,
    /// The 1-based column where the offending text starts.
    pub column: usize,
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { kind, text, column } = self;
        match kind {
            LexicalErrorKind::InvalidToken | LexicalErrorKind::MalformedNumber => {
                write!(f, "! LEXICAL ERROR: '{text}' isn't a valid token (column {column})")
            },
            LexicalErrorKind::UnknownMethod => {
                write!(f, "! LEXICAL ERROR: '{text}' isn't a valid vector method (column {column})")
            },
            LexicalErrorKind::UnterminatedString => {
                write!(f, "! LEXICAL ERROR: Unterminated string {text} (column {column})")
            },
            LexicalErrorKind::InvalidEscape(c) => write!(f,
                                                         "! LEXICAL ERROR: Invalid escape sequence '\\{c}' in {text} (column {column})"),
        }
    }
}

impl std::error::Error for LexicalError {}
