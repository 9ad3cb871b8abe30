/// Numeric conversion helpers.
///
/// Widening of integers to decimals, and checked conversions of counts and
/// lengths that fail with `Overflow` when a value is out of range.
pub mod num;
