use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Converts text to a number.
///
/// Accepts exactly one argument.
/// - Strings and characters are trimmed and parsed as an integer first, then
///   as a decimal.
/// - Integers and decimals are returned unchanged.
///
/// # Errors
/// - `ConversionError` if the text is neither an integer nor a decimal.
/// - `TypeMismatch` for booleans.
///
/// # Example
/// ```
/// use lip::interpreter::{evaluator::function::to_num::to_num, value::core::Value};
///
/// assert_eq!(to_num(&[" 42 ".into()], 1).unwrap(), Value::Integer(42));
/// assert_eq!(to_num(&["2.5".into()], 1).unwrap(), Value::Decimal(2.5));
/// assert_eq!(to_num(&[Value::Decimal(1.5)], 1).unwrap(), Value::Decimal(1.5));
/// assert!(to_num(&["abc".into()], 1).is_err());
/// ```
pub fn to_num(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("to_num", args, 1, line)?;

    let arg = &args[0];
    if arg.is_numeric() {
        return Ok(arg.clone());
    }

    let Some(text) = arg.as_text() else {
        return Err(RuntimeError::TypeMismatch { details: format!("to_num expects a str, found {}",
                                                                 arg.type_name()),
                                                line });
    };

    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Value::Integer(n));
    }
    if let Ok(d) = trimmed.parse::<f64>() {
        return Ok(Value::Decimal(d));
    }

    Err(RuntimeError::ConversionError { details: format!("'{text}' is not a number"),
                                        line })
}
