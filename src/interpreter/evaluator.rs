/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation and repetition, and comparisons.
pub mod binary;

/// Console access: `drucken` output and `eingabe` input.
pub mod console;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and error
/// propagation.
pub mod core;

/// The variable store.
///
/// Maps names to values and remembers which variables carry a declared type.
pub mod environment;

/// Evaluation of `for` loops.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;

/// Typed declarations and the conformance rules of the five types.
pub mod typed;
