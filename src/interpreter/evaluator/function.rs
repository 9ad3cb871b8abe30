/// Function dispatch: the built-in table and user-defined calls.
pub mod core;

/// The `to_num` function implementation.
///
/// Converts text to an integer or decimal.
pub mod to_num;

/// The `len` implementation.
///
/// Counts the characters of a string.
pub mod length;
