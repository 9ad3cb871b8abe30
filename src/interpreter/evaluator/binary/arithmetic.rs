use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{i64_to_count_checked, i64_to_f64},
};

impl Context {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// - Two integers stay integers for `+ - *`; overflow is an error.
    /// - A decimal on either side widens the other operand.
    /// - `/` always divides as decimals and fails on a zero divisor.
    /// - `+` on two strings or characters concatenates them.
    /// - `*` of a string or character and an integer repeats the text; a
    ///   negative count yields the empty string.
    ///
    /// Any other combination is a `TypeMismatch`.
    ///
    /// # Example
    /// ```
    /// use lip::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let r = Context::eval_arithmetic(BinaryOperator::Div, &7.into(), &2.into(), 1).unwrap();
    /// assert_eq!(r, Value::Decimal(3.5));
    ///
    /// let r = Context::eval_arithmetic(BinaryOperator::Mul, &"ab".into(), &3.into(), 1).unwrap();
    /// assert_eq!(r, Value::Str("ababab".into()));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};
        use Value::Integer;

        match (left, right) {
            (Integer(a), Integer(b)) => integer_op(op, *a, *b, line),
            _ if left.is_numeric() && right.is_numeric() => {
                decimal_op(op, left.as_decimal(line)?, right.as_decimal(line)?, line)
            },
            _ => {
                if op == Add
                   && let (Some(a), Some(b)) = (left.as_text(), right.as_text())
                {
                    return Ok(Value::Str(a + &b));
                }
                if op == Mul {
                    let repetition = match (left, right) {
                        (text, Integer(n)) | (Integer(n), text) => text.as_text().map(|s| (s, *n)),
                        _ => None,
                    };
                    if let Some((text, count)) = repetition {
                        return repeat(&text, count, line);
                    }
                }
                Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line })
            },
        }
    }
}

/// Integer `+ - *` with overflow checks. Division is delegated to
/// [`decimal_op`].
fn integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Mul, Sub};

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        _ => return decimal_op(op, i64_to_f64(a), i64_to_f64(b), line),
    };

    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { line })
}

/// Decimal `+ - * /`. Division by zero is checked before dividing.
fn decimal_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Mul, Sub};

    Ok(Value::Decimal(match op {
                          Add => a + b,
                          Sub => a - b,
                          Mul => a * b,
                          _ => {
                              if b == 0.0 {
                                  return Err(RuntimeError::DivisionByZero { line });
                              }
                              a / b
                          },
                      }))
}

/// Repeats `text` `count` times.
fn repeat(text: &str, count: i64, line: usize) -> EvalResult<Value> {
    let count = i64_to_count_checked(count, line)?;

    if text.len().checked_mul(count).is_none() {
        return Err(RuntimeError::Overflow { line });
    }

    Ok(Value::Str(text.repeat(count)))
}
