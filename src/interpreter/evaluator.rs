/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparison, logical operators and string
/// concatenation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric identity and negation, and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the session context, the recursive evaluation engine, `let`
/// scoping, conditionals and the per-expression evaluation boundary.
pub mod core;

/// Evaluation of `for` and `while` loops.
///
/// Manages the loop variable's scope and joins the values of the iterations.
pub mod for_loop;

/// Helpers shared by loops and vectors: range bounds and vector lookup.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined function calls, built-in math functions and `log`.
pub mod function;

/// Vector literals, ranges, indexing and the `next`/`current`/`size`
/// methods.
pub mod vector;
