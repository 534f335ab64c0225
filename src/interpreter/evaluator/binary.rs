/// Operator dispatch.
///
/// Evaluates both operands and routes the operator to its handler.
pub mod core;

/// `+`, `-`, `*`, `/`, `%` and `^` on numbers.
pub mod arithmetic;

/// Relational and equality operators.
pub mod comparison;

/// `&` and `|`.
pub mod logic;

/// String concatenation with `@`.
pub mod concat;
