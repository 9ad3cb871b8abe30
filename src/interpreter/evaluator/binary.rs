/// Dispatch of binary operators to their handlers.
pub mod core;

/// `+ - * /` on numbers, plus string concatenation and repetition.
pub mod arithmetic;

/// Equality and ordering.
pub mod comparison;
