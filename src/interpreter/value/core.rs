use crate::{
    ast::{LiteralValue, TypeTag},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Decimal(f64),
    /// A string value.
    Str(String),
    /// A single character. `None` is the empty character, the zero value of
    /// `chr`.
    Char(Option<char>),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.).
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(Some(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Decimal(d) => Self::Decimal(*d),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Character(c) => Self::Char(Some(*c)),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Returns the zero value a declaration of type `ty` starts with.
    ///
    /// # Example
    /// ```
    /// use lip::{ast::TypeTag, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::zero_value(TypeTag::Num), Value::Integer(0));
    /// assert_eq!(Value::zero_value(TypeTag::Dec), Value::Decimal(0.0));
    /// assert_eq!(Value::zero_value(TypeTag::Chr), Value::Char(None));
    /// ```
    #[must_use]
    pub const fn zero_value(ty: TypeTag) -> Self {
        match ty {
            TypeTag::Num => Self::Integer(0),
            TypeTag::Dec => Self::Decimal(0.0),
            TypeTag::Str => Self::Str(String::new()),
            TypeTag::Chr => Self::Char(None),
            TypeTag::Bool => Self::Bool(false),
        }
    }

    /// Name of the value's type, as written in source code.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "num",
            Self::Decimal(_) => "dec",
            Self::Str(_) => "str",
            Self::Char(_) => "chr",
            Self::Bool(_) => "bool",
        }
    }

    /// Tests the value in a condition.
    ///
    /// `0`, `0.0`, the empty string, the empty character and `false` are
    /// falsy; everything else is truthy.
    ///
    /// # Example
    /// ```
    /// use lip::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Char(None).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Decimal(d) => *d != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Char(c) => c.is_some(),
            Self::Bool(b) => *b,
        }
    }

    /// Returns `true` for integers and decimals.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Decimal(_))
    }

    /// Returns the textual content of strings and characters.
    ///
    /// A character is returned as a one-character string, the empty character
    /// as `""`. Any other value returns `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Char(c) => Some(c.map(String::from).unwrap_or_default()),
            _ => None,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers are widened, rounding those beyond `2^53`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use lip::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_decimal(42).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_decimal(42).is_err());
    /// ```
    pub fn as_decimal(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Decimal(d) => Ok(*d),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d:?}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Char(Some(c)) => write!(f, "{c}"),
            Self::Char(None) => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
