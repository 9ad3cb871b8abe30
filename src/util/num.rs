use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Widens an `i64` to `f64`.
///
/// Integers beyond `2^53` are rounded to the nearest representable decimal,
/// as every mixed integer and decimal operation does.
///
/// ## Example
/// ```
/// use lip::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a `usize` count (such as a string length) to `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the count does not fit.
///
/// ## Example
/// ```
/// use lip::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(5, 1).unwrap(), 5);
/// ```
pub fn usize_to_i64_checked(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}

/// Converts an `i64` repetition count to `usize`, clamping negative counts
/// to zero.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if a positive count does not fit into
/// `usize` on this platform.
///
/// ## Example
/// ```
/// use lip::util::num::i64_to_count_checked;
///
/// assert_eq!(i64_to_count_checked(3, 1).unwrap(), 3);
/// assert_eq!(i64_to_count_checked(-2, 1).unwrap(), 0);
/// ```
pub fn i64_to_count_checked(value: i64, line: usize) -> EvalResult<usize> {
    if value < 0 {
        return Ok(0);
    }

    usize::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
