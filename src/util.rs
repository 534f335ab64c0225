/// Numeric conversion helpers.
///
/// Safe conversions between `f64` and the integer types used for range
/// bounds, vector indices and vector sizes. Every fallible conversion returns
/// the caller's error instead of silently truncating or rounding.
pub mod num;
/// Stack growth for deep recursion.
///
/// The parser and evaluator are recursive; nesting up to their configured
/// depth limits must not overflow the native stack, even on small threads.
pub mod stack;
