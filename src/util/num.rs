/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if the value is finite, integral and exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use hulk::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(-3.0, "bad"), Ok(-3));
/// assert_eq!(f64_to_i64_checked(2.5, "bad"), Err("bad"));
/// assert_eq!(f64_to_i64_checked(f64::NAN, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Converts an `f64` to `usize` if the value is a non-negative integer.
///
/// ## Errors
/// Returns `Err(error)` for negative, fractional, non-finite or oversized
/// values.
///
/// ## Example
/// ```
/// use hulk::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(4.0, ()), Ok(4));
/// assert!(f64_to_usize_checked(-1.0, ()).is_err());
/// ```
pub fn f64_to_usize_checked<E>(value: f64, error: E) -> Result<usize, E> {
    match f64_to_i64_checked(value, ()) {
        Ok(n) => usize::try_from(n).map_err(|_| error),
        Err(()) => Err(error),
    }
}

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in magnitude.
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a collection length to `f64`.
///
/// Lengths are bounded by memory and by the range limit, both far below
/// `2^53`, so the conversion is exact in practice.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn len_to_f64(len: usize) -> f64 {
    len as f64
}
