/// Lexical errors.
///
/// Defines the error kinds produced while splitting source text into tokens:
/// unrecognized characters, malformed numbers, unknown vector methods and
/// broken string literals.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree,
/// including unexpected tokens, exceeded nesting depth and invalid function
/// declarations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined names, arity and type mismatches, vector misuse,
/// domain errors and recursion limits.
pub mod runtime_error;

pub use lexical_error::{LexicalError, LexicalErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
