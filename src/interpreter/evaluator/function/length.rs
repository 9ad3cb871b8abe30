use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::usize_to_i64_checked,
};

impl Context {
    /// Evaluates `len(expr)`.
    pub fn eval_length(&mut self, expr: &Expr, line: usize) -> EvalResult<Option<Value>> {
        let value = self.eval_child(expr, line)?;
        Ok(Some(length(&value, line)?))
    }
}

/// Counts the characters of a string.
///
/// A character has length 1, the empty character length 0.
///
/// # Errors
/// Returns `TypeMismatch` for numbers and booleans.
///
/// # Example
/// ```
/// use lip::interpreter::{evaluator::function::length::length, value::core::Value};
///
/// assert_eq!(length(&"hello".into(), 1).unwrap(), Value::Integer(5));
/// assert_eq!(length(&"äö".into(), 1).unwrap(), Value::Integer(2));
/// assert!(length(&Value::Integer(42), 1).is_err());
/// ```
pub fn length(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Str(s) => Ok(Value::Integer(usize_to_i64_checked(s.chars().count(), line)?)),
        Value::Char(c) => Ok(Value::Integer(i64::from(c.is_some()))),
        _ => Err(RuntimeError::TypeMismatch { details: format!("len expects a str, found {}",
                                                               value.type_name()),
                                              line }),
    }
}
