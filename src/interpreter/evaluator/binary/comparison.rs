use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any two values (see [`values_equal`]). The
    /// ordering operators require two numbers or two strings; a comparison
    /// involving NaN is false.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use lip::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Decimal(3.0);
    /// let b = Value::Integer(5);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &a, &"3".into(), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if matches!(op, Equal | NotEqual) {
            let equal = values_equal(left, right);
            return Ok(Value::Bool(if op == Equal { equal } else { !equal }));
        }

        let Some(ordering) = compare_values(left, right, line)? else {
            return Ok(Value::Bool(false));
        };

        Ok(Value::Bool(match op {
                           Less => ordering == Ordering::Less,
                           Greater => ordering == Ordering::Greater,
                           LessEqual => ordering != Ordering::Greater,
                           GreaterEqual => ordering != Ordering::Less,
                           _ => unreachable!("equality handled above"),
                       }))
    }
}

/// Tests two values for equality.
///
/// Integers and decimals compare numerically, strings and characters compare
/// by their text. Values of unrelated kinds are never equal.
///
/// # Example
/// ```
/// use lip::interpreter::{evaluator::binary::comparison::values_equal, value::core::Value};
///
/// assert!(values_equal(&Value::Integer(2), &Value::Decimal(2.0)));
/// assert!(values_equal(&Value::Char(Some('a')), &Value::Str("a".into())));
/// assert!(!values_equal(&Value::Integer(1), &Value::Bool(true)));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    use Value::{Bool, Decimal, Integer};

    match (left, right) {
        (Integer(a), Integer(b)) => a == b,
        (Integer(a), Decimal(b)) | (Decimal(b), Integer(a)) => i64_to_f64(*a) == *b,
        (Decimal(a), Decimal(b)) => a == b,
        (Bool(a), Bool(b)) => a == b,
        _ => match (left.as_text(), right.as_text()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Orders two numbers or two strings.
///
/// # Returns
/// `None` if a decimal operand is NaN.
///
/// # Errors
/// Returns `TypeMismatch` for any other pair of values.
pub fn compare_values(left: &Value, right: &Value, line: usize) -> EvalResult<Option<Ordering>> {
    use Value::{Decimal, Integer};

    match (left, right) {
        (Integer(a), Integer(b)) => Ok(Some(a.cmp(b))),
        (Integer(a), Decimal(b)) => Ok(i64_to_f64(*a).partial_cmp(b)),
        (Decimal(a), Integer(b)) => Ok(a.partial_cmp(&i64_to_f64(*b))),
        (Decimal(a), Decimal(b)) => Ok(a.partial_cmp(b)),
        _ => match (left.as_text(), right.as_text()) {
            (Some(a), Some(b)) => Ok(Some(a.cmp(&b))),
            _ => Err(RuntimeError::TypeMismatch { details: format!("cannot order {} and {}",
                                                                   left.type_name(),
                                                                   right.type_name()),
                                                  line }),
        },
    }
}
