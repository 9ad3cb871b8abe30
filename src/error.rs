/// Lexing and parsing errors.
///
/// Defines all error types that can occur while scanning and parsing source
/// code: characters no token accepts, unexpected tokens, missing delimiters
/// and premature end of input. All of them are detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include unknown names, type mismatches, arity mismatches,
/// division by zero and failed conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
