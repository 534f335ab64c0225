use logos::Logos;

use crate::{
    ast::{MathConstant, MathFunction, VectorMethod},
    error::{LexicalError, LexicalErrorKind},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexicalErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// A digit run glued to a letter (`12abc`) is matched here too and
    /// rejected by the callback as a malformed token.
    #[regex(r"[0-9]+(\.[0-9]+)?([A-Za-z_][A-Za-z0-9_]*)?", parse_number)]
    Number(f64),
    /// String literal tokens. The payload is the unescaped content without
    /// the surrounding quotes.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string)]
    #[regex(r#""([^"\\\n]|\\[^\n])*"#, unterminated_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `function`
    #[token("function")]
    Function,
    /// `print`
    #[token("print")]
    Print,
    /// One-argument math functions: `sin`, `cos`, `sqrt`, `exp`.
    #[token("sin", |_| MathFunction::Sin)]
    #[token("cos", |_| MathFunction::Cos)]
    #[token("sqrt", |_| MathFunction::Sqrt)]
    #[token("exp", |_| MathFunction::Exp)]
    Math(MathFunction),
    /// `log`
    #[token("log")]
    Log,
    /// `rand`
    #[token("rand")]
    Rand,
    /// `range`
    #[token("range")]
    Range,
    /// Named constants: `PI` and `E`.
    #[token("PI", |_| MathConstant::Pi, priority = 3)]
    #[token("E", |_| MathConstant::E, priority = 3)]
    Constant(MathConstant),
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Vector method suffixes: `.next`, `.current`, `.size`.
    #[regex(r"\.[A-Za-z_][A-Za-z0-9_]*", parse_method)]
    Method(VectorMethod),
    /// `=>`
    #[token("=>")]
    Arrow,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `@`
    #[token("@")]
    At,
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
}

/// A token together with the 1-based column where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The recognized token.
    pub token:  Token,
    /// The 1-based column of the first character of the token.
    pub column: usize,
}

impl Token {
    /// Returns a short, human readable description of the token used in
    /// syntax diagnostics.
    ///
    /// # Example
    /// ```
    /// use hulk::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::RParen.describe(), "')'");
    /// assert_eq!(Token::Identifier("x".into()).describe(), "identifier 'x'");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number '{n}'"),
            Self::Str(s) => format!("string \"{s}\""),
            Self::Bool(b) => format!("boolean '{b}'"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Math(f) => format!("'{f}'"),
            Self::Constant(c) => format!("'{c}'"),
            Self::Method(m) => format!("'.{m}'"),
            other => format!("'{}'", other.symbol()),
        }
    }

    /// Returns the source spelling of keyword, operator and delimiter tokens.
    const fn symbol(&self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::In => "in",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::For => "for",
            Self::While => "while",
            Self::Function => "function",
            Self::Print => "print",
            Self::Log => "log",
            Self::Rand => "rand",
            Self::Range => "range",
            Self::Arrow => "=>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::At => "@",
            Self::Bang => "!",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Number(_)
            | Self::Str(_)
            | Self::Bool(_)
            | Self::Math(_)
            | Self::Constant(_)
            | Self::Identifier(_)
            | Self::Method(_) => "",
        }
    }
}

/// Splits `source` into lexemes, collecting lexical errors on the side.
///
/// Lexing never stops early: an unrecognized or malformed run of characters
/// is recorded as a [`LexicalError`] and scanning resumes right after it.
///
/// # Example
/// ```
/// use hulk::interpreter::lexer::{Token, tokenize};
///
/// let (lexemes, errors) = tokenize("let x = 4 in x $;");
///
/// assert_eq!(lexemes[0].token, Token::Let);
/// assert_eq!(lexemes[3].token, Token::Number(4.0));
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].column, 16);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Lexeme>, Vec<LexicalError>) {
    let mut lexemes = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut offset = 0;
    let mut column = 1;

    while let Some(result) = lexer.next() {
        let start = lexer.span().start;
        column += source[offset..start].chars().count();
        offset = start;
        match result {
            Ok(token) => lexemes.push(Lexeme { token, column }),
            Err(kind) => {
                tracing::trace!(?kind, column, "lexical error");
                errors.push(LexicalError { kind,
                                           text: lexer.slice().to_string(),
                                           column });
            },
        }
    }

    (lexemes, errors)
}

/// Parses a numeric literal from the current token slice.
///
/// # Errors
/// Returns [`LexicalErrorKind::MalformedNumber`] when the digits are directly
/// followed by identifier characters, as in `12abc`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexicalErrorKind> {
    let slice = lex.slice();
    if slice.chars().any(|c| c.is_ascii_alphabetic() || c == '_') {
        return Err(LexicalErrorKind::MalformedNumber);
    }
    slice.parse().map_err(|_| LexicalErrorKind::MalformedNumber)
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the quotes of a string literal and expands its escape sequences.
///
/// Recognized escapes are `\n`, `\t`, `\"` and `\\`.
fn parse_string(lex: &logos::Lexer<Token>) -> Result<String, LexicalErrorKind> {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut unescaped = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('t') => unescaped.push('\t'),
            Some('"') => unescaped.push('"'),
            Some('\\') => unescaped.push('\\'),
            Some(other) => return Err(LexicalErrorKind::InvalidEscape(other)),
            None => return Err(LexicalErrorKind::UnterminatedString),
        }
    }

    Ok(unescaped)
}

/// Rejects a string literal that reaches the end of the line without its
/// closing quote.
fn unterminated_string(_: &logos::Lexer<Token>) -> Result<String, LexicalErrorKind> {
    Err(LexicalErrorKind::UnterminatedString)
}

/// Resolves a `.name` suffix to one of the supported vector methods.
fn parse_method(lex: &logos::Lexer<Token>) -> Result<VectorMethod, LexicalErrorKind> {
    match &lex.slice()[1..] {
        "next" => Ok(VectorMethod::Next),
        "current" => Ok(VectorMethod::Current),
        "size" => Ok(VectorMethod::Size),
        _ => Err(LexicalErrorKind::UnknownMethod),
    }
}
