/// Core parsing logic: the program and expression entry points and
/// conditional chains.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for comparison, additive and
/// multiplicative operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, literals, variables, calls, grouping, `eingabe`
/// and `len`.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited statement lists used by `if`, `for` and `func`.
pub mod block;

/// Shared helpers for the parser.
pub mod utils;

/// Statement parsing.
///
/// Implements logic for parsing every statement form: function definitions,
/// returns, prints, conditionals, loops, typed declarations, assignments and
/// expression statements.
pub mod statement;
