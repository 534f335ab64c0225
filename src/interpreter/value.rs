/// The runtime value type and its conversions.
///
/// Defines `Value`, the result of evaluating any expression: numbers,
/// booleans, strings and vectors, along with accessors and the display form
/// used by printing, concatenation and loop output.
pub mod core;
