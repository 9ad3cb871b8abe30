use crate::{
    ast::TypeTag,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

impl Context {
    /// Declares `name` with the zero value of `ty`.
    ///
    /// An existing binding of the same name is replaced, type included.
    pub fn eval_declaration(&mut self, name: &str, ty: TypeTag) {
        self.env.declare(name, ty, Value::zero_value(ty));
    }

    /// Declares `name` as `ty` and assigns `value` to it.
    ///
    /// # Returns
    /// The stored value, which may differ from `value` by widening (see
    /// [`conform`]).
    ///
    /// # Errors
    /// Returns `TypeMismatch` if `value` does not conform to `ty`. The
    /// environment is left unchanged in that case.
    pub fn eval_typed_assignment(&mut self,
                                 name: &str,
                                 ty: TypeTag,
                                 value: Value,
                                 line: usize)
                                 -> EvalResult<Value> {
        let value = conform(ty, value, name, line)?;
        self.env.declare(name, ty, value.clone());
        Ok(value)
    }

    /// Assigns `value` to `name`, creating the variable if needed.
    ///
    /// If `name` was introduced by a typed declaration, the value is checked
    /// against the declared type just like a typed assignment.
    ///
    /// # Example
    /// ```
    /// use lip::{interpreter::evaluator::core::Context, run};
    ///
    /// let mut context = Context::with_io(Box::new(Vec::new()), Box::new(std::io::empty()));
    ///
    /// assert!(run("dec d = 1; d = 2", &mut context).is_ok());
    /// assert!(run("num n = 1; n = 2.5", &mut context).is_err());
    /// ```
    pub fn eval_assignment(&mut self, name: &str, value: Value, line: usize) -> EvalResult<Value> {
        let value = match self.env.declared_type(name) {
            Some(ty) => conform(ty, value, name, line)?,
            None => value,
        };

        self.env.set(name, value.clone());
        Ok(value)
    }
}

/// Checks `value` against the declared type `ty` of variable `name`.
///
/// - `num` accepts integers only.
/// - `dec` accepts decimals and widens integers.
/// - `str` accepts strings; a character becomes a one-character string.
/// - `chr` accepts characters and one-character strings.
/// - `bool` accepts booleans only.
///
/// # Returns
/// The value as it is stored.
///
/// # Errors
/// Returns `TypeMismatch` naming the declared type and the variable.
///
/// # Example
/// ```
/// use lip::{
///     ast::TypeTag,
///     interpreter::{evaluator::typed::conform, value::core::Value},
/// };
///
/// let widened = conform(TypeTag::Dec, Value::Integer(2), "d", 1).unwrap();
/// assert_eq!(widened, Value::Decimal(2.0));
///
/// assert!(conform(TypeTag::Num, Value::Decimal(2.0), "n", 1).is_err());
/// assert!(conform(TypeTag::Chr, Value::Str("ab".into()), "c", 1).is_err());
/// ```
pub fn conform(ty: TypeTag, value: Value, name: &str, line: usize) -> EvalResult<Value> {
    match (ty, value) {
        (TypeTag::Num, value @ Value::Integer(_))
        | (TypeTag::Dec, value @ Value::Decimal(_))
        | (TypeTag::Str, value @ Value::Str(_))
        | (TypeTag::Chr, value @ Value::Char(_))
        | (TypeTag::Bool, value @ Value::Bool(_)) => Ok(value),

        (TypeTag::Dec, Value::Integer(n)) => Ok(Value::Decimal(i64_to_f64(n))),
        (TypeTag::Str, Value::Char(c)) => Ok(Value::Str(c.map(String::from).unwrap_or_default())),
        (TypeTag::Chr, Value::Str(s)) if s.chars().count() == 1 => Ok(Value::Char(s.chars().next())),

        (ty, value) => Err(RuntimeError::TypeMismatch { details: format!("cannot assign {} value '{value}' to {ty} variable '{name}'",
                                                                          value.type_name()),
                                                        line }),
    }
}
