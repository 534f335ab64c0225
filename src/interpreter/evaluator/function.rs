/// Built-in math functions and `log`.
///
/// Checks argument types and logarithm domains before computing.
pub mod builtin;

/// User-defined function calls.
///
/// Resolves the function, checks arity, argument types and call depth, and
/// evaluates the body in a fresh scope.
pub mod core;
