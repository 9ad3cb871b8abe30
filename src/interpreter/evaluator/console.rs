use std::io::{self, BufRead, Write};

use crate::{
    ast::TypeTag,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Writes `value` followed by a line break to the output stream.
    pub fn print_value(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| io_error(&e, line))
    }

    /// Evaluates `eingabe`.
    ///
    /// Writes the prompt, if any, without a line break and flushes the output
    /// so it shows up before the blocking read. Then reads one line, strips
    /// its line break and converts it with [`convert_input`].
    ///
    /// # Errors
    /// - `InputUnavailable` if the input stream is exhausted.
    /// - `ConversionError` if the line does not match the requested type.
    /// - `Io` if reading or writing fails.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use lip::{
    ///     ast::TypeTag,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_io(Box::new(Vec::new()), Box::new(Cursor::new("yes\n")));
    /// let value = context.eval_input(Some("Continue? "), Some(TypeTag::Bool), 1).unwrap();
    ///
    /// assert_eq!(value, Value::Bool(true));
    /// assert!(context.eval_input(None, None, 2).is_err());
    /// ```
    pub fn eval_input(&mut self,
                      prompt: Option<&str>,
                      ty: Option<TypeTag>,
                      line: usize)
                      -> EvalResult<Value> {
        if let Some(prompt) = prompt {
            write!(self.output, "{prompt}").map_err(|e| io_error(&e, line))?;
            self.output.flush().map_err(|e| io_error(&e, line))?;
        }

        let mut raw = String::new();
        let read = self.input
                       .read_line(&mut raw)
                       .map_err(|e| io_error(&e, line))?;
        if read == 0 {
            return Err(RuntimeError::InputUnavailable { line });
        }

        let raw = raw.strip_suffix('\n')
                     .map_or(raw.as_str(), |s| s.strip_suffix('\r').unwrap_or(s));

        convert_input(raw, ty, line)
    }
}

/// Converts a line read by `eingabe` to the requested type.
///
/// - `num` parses an integer, `dec` a decimal; surrounding whitespace is
///   ignored.
/// - `bool` accepts `true`, `yes`, `y`, `1` and `false`, `no`, `n`, `0`,
///   ignoring case.
/// - `chr` requires exactly one character.
/// - `str` or no type returns the line unchanged.
///
/// # Errors
/// Returns `ConversionError` naming the text and the requested type.
///
/// # Example
/// ```
/// use lip::{
///     ast::TypeTag,
///     interpreter::{evaluator::console::convert_input, value::core::Value},
/// };
///
/// assert_eq!(convert_input(" 12 ", Some(TypeTag::Num), 1).unwrap(), Value::Integer(12));
/// assert_eq!(convert_input("N", Some(TypeTag::Bool), 1).unwrap(), Value::Bool(false));
/// assert_eq!(convert_input("x", Some(TypeTag::Chr), 1).unwrap(), Value::Char(Some('x')));
/// assert!(convert_input("1.5", Some(TypeTag::Num), 1).is_err());
/// ```
pub fn convert_input(raw: &str, ty: Option<TypeTag>, line: usize) -> EvalResult<Value> {
    let failed = |expected: TypeTag| {
        RuntimeError::ConversionError { details: format!("'{raw}' is not a valid {expected}"),
                                        line }
    };

    match ty {
        None | Some(TypeTag::Str) => Ok(Value::Str(raw.to_string())),
        Some(TypeTag::Num) => raw.trim()
                                 .parse::<i64>()
                                 .map(Value::Integer)
                                 .map_err(|_| failed(TypeTag::Num)),
        Some(TypeTag::Dec) => raw.trim()
                                 .parse::<f64>()
                                 .map(Value::Decimal)
                                 .map_err(|_| failed(TypeTag::Dec)),
        Some(TypeTag::Bool) => match raw.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "n" | "0" => Ok(Value::Bool(false)),
            _ => Err(failed(TypeTag::Bool)),
        },
        Some(TypeTag::Chr) => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(Some(c))),
                _ => Err(failed(TypeTag::Chr)),
            }
        },
    }
}

fn io_error(error: &io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { details: error.to_string(),
                       line }
}
