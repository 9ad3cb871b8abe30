use std::collections::HashMap;

use crate::{ast::TypeTag, interpreter::value::core::Value};

/// The active variable store of a running program.
///
/// Exactly one environment is active at a time. A function call swaps the
/// whole environment for a fresh one and restores it afterwards, so a callee
/// never sees its caller's variables.
///
/// Besides the values, the environment remembers the declared type of every
/// variable introduced by a typed declaration; later writes to such a
/// variable are checked against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
    types:  HashMap<String, TypeTag>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    ///
    /// # Example
    /// ```
    /// use lip::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(5));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Integer(5)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the declared type of `name`, if it was introduced by a typed
    /// declaration.
    #[must_use]
    pub fn declared_type(&self, name: &str) -> Option<TypeTag> {
        self.types.get(name).copied()
    }

    /// Binds `name` to `value` and records its declared type.
    ///
    /// A repeated declaration replaces both the value and the type.
    pub fn declare(&mut self, name: &str, ty: TypeTag, value: Value) {
        self.types.insert(name.to_string(), ty);
        self.values.insert(name.to_string(), value);
    }

    /// Binds `name` to `value`, keeping any declared type.
    ///
    /// The caller is responsible for checking `value` against
    /// [`Environment::declared_type`].
    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Returns all bindings ordered by name.
    ///
    /// # Example
    /// ```
    /// use lip::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("b", Value::Integer(2));
    /// env.set("a", Value::Integer(1));
    ///
    /// let names: Vec<&str> = env.sorted().into_iter().map(|(n, _)| n).collect();
    /// assert_eq!(names, vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<(&str, &Value)> =
            self.values.iter().map(|(name, value)| (name.as_str(), value)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
