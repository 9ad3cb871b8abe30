use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, MAX_CALL_DEPTH},
            environment::Environment,
            function::to_num,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "to_num" => { arity: 1, func: to_num::to_num },
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it verifies arity and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arg_vals`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function(&mut self,
                                name: &str,
                                arg_vals: Vec<Value>,
                                line: usize)
                                -> EvalResult<Option<Value>> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if arg_vals.len() != builtin.arity {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: builtin.arity,
                                                                 found: arg_vals.len(),
                                                                 line });
            }
            return (builtin.func)(&arg_vals, line).map(Some);
        }

        self.call_user_defined_function(name, arg_vals, line)
    }

    /// Executes a user-defined function.
    ///
    /// The whole active environment is set aside and replaced by a fresh one
    /// that holds only the parameters, bound positionally to `arg_vals`. The
    /// caller's environment is restored when the body finishes, whether it
    /// succeeded or failed.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Call nesting deeper than [`MAX_CALL_DEPTH`].
    ///
    /// # Returns
    /// Optional result produced by the function body.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  arg_vals: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Option<Value>> {
        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                      line })?;

        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: func.params.len(),
                                                             found: arg_vals.len(),
                                                             line });
        }

        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { depth: MAX_CALL_DEPTH,
                                                      line });
        }

        let mut locals = Environment::new();
        for (param, value) in func.params.iter().zip(arg_vals) {
            locals.set(param, value);
        }

        let caller_env = std::mem::replace(&mut self.env, locals);
        self.depth += 1;

        let result = self.eval_function_body(&func.body);

        self.depth -= 1;
        self.env = caller_env;

        result
    }

    /// Runs a function body.
    ///
    /// The first `return` found directly in the body ends it with the
    /// returned value. Otherwise the value of the last statement is the
    /// result. A `return` nested in an `if` or `for` only yields its value.
    fn eval_function_body(&mut self, body: &[Statement]) -> EvalResult<Option<Value>> {
        let mut last = None;

        for statement in body {
            if let Statement::Return { value, line } = statement {
                return Ok(Some(self.eval_child(value, *line)?));
            }
            last = self.eval_statement(statement)?;
        }

        Ok(last)
    }
}

/// Ensures that a user-defined function name is valid.
///
/// A function name is rejected if it is the name of a builtin. Redefining a
/// user-defined function replaces the earlier definition.
///
/// # Parameters
/// - `name`: Name to validate.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Ok(())` if the name is allowed, otherwise an error.
///
/// # Example
/// ```
/// use lip::interpreter::evaluator::function::core::validate_function_name;
///
/// assert!(validate_function_name("square", 1).is_ok());
/// assert!(validate_function_name("to_num", 1).is_err());
/// ```
pub fn validate_function_name(name: &str, line: usize) -> EvalResult<()> {
    if BUILTIN_FUNCTIONS.contains(&name) {
        return Err(RuntimeError::BuiltinFunctionRedefinition { name: name.to_string(),
                                                               line });
    }
    Ok(())
}
