/// Parser state, entry points and the depth guard.
///
/// Defines `Parser`, `SyntaxTree` and `ParseResult`, and the expression entry
/// point shared by every other parsing routine.
pub mod core;

/// Binary operator parsing by precedence climbing.
pub mod binary;

/// Unary operators, primaries and identifier-led forms.
///
/// Handles literals, parenthesized expressions, vector literals, built-in
/// calls, function calls, indexing and vector methods.
pub mod unary;

/// Keyword-led compound expressions: `let`, `if`, `for` and `while`.
pub mod control;

/// Statements and function declarations.
///
/// Splits a line into `;`-terminated statements, attaches lexical errors to
/// them and enters function declarations into the session's function table.
pub mod statement;

/// Token-level helpers used by all parsing routines: lookahead, expected
/// tokens and error recovery.
pub mod utils;

pub use self::core::{ParseResult, Parser, SyntaxTree};
