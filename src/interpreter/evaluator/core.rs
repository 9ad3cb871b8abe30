use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::Environment, function::core::validate_function_name},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum nesting of user-defined function calls.
pub const MAX_CALL_DEPTH: usize = 200;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the active variable environment,
/// all user defined functions, and the console streams used by `drucken` and
/// `eingabe`.
///
/// ## Usage
///
/// `Context` is created once per program run and reused for every statement.
/// All evaluation methods (like `eval()` and `eval_statement()`) access this
/// state to resolve variables and functions.
pub struct Context {
    /// The active variables. Replaced wholesale for the duration of a
    /// function call.
    pub env:           Environment,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated when a `func` statement executes.
    pub functions:     HashMap<String, FunctionDef>,
    /// Current nesting of user-defined function calls.
    pub(crate) depth:  usize,
    /// Sink for `drucken` output and `eingabe` prompts.
    pub(crate) output: Box<dyn Write>,
    /// Source of `eingabe` lines.
    pub(crate) input:  Box<dyn BufRead>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context bound to the process's standard
    /// output and standard input, with an empty environment and no
    /// user-defined functions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(Box::new(io::stdout()), Box::new(io::stdin().lock()))
    }

    /// Creates a new evaluation context writing to `output` and reading
    /// `eingabe` lines from `input`.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use lip::{interpreter::evaluator::core::Context, run};
    ///
    /// let mut context = Context::with_io(Box::new(Vec::new()), Box::new(Cursor::new("7\n")));
    /// run("x = eingabe(num) * 2", &mut context).unwrap();
    ///
    /// assert_eq!(context.env.get("x").map(ToString::to_string), Some("14".to_string()));
    /// ```
    #[must_use]
    pub fn with_io(output: Box<dyn Write>, input: Box<dyn BufRead>) -> Self {
        Self { env:       Environment::new(),
               functions: HashMap::new(),
               depth:     0,
               output,
               input }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, binary operations, function calls, console input
    /// and `len`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for a
    /// call of a user-defined function whose body produced nothing.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value, .. } => Self::eval_literal(value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::Input { prompt, ty, line } => {
                let value = self.eval_input(prompt.as_deref(), *ty, *line)?;
                Ok(Some(value))
            },
            Expr::Length { expr, line } => self.eval_length(expr, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Handles function definitions, returns, prints, conditionals, loops,
    /// declarations, assignments and plain expression statements. Statements
    /// may modify the context or produce a value.
    ///
    /// A `return` evaluated here only yields its value; leaving a function
    /// early is handled by the caller of the function body.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for statements that yield a result, or `None` when no
    /// value is produced.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Function(def) => {
                validate_function_name(&def.name, def.line)?;
                self.functions.insert(def.name.clone(), def.clone());
                Ok(None)
            },
            Statement::Return { value, line } => Ok(Some(self.eval_child(value, *line)?)),
            Statement::Print { expr, line } => {
                let value = self.eval_child(expr, *line)?;
                self.print_value(&value, *line)?;
                Ok(Some(value))
            },
            Statement::If(if_statement) => self.eval_if(if_statement),
            Statement::For(for_loop) => self.eval_for(for_loop),
            Statement::Declaration { name, ty, .. } => {
                self.eval_declaration(name, *ty);
                Ok(None)
            },
            Statement::TypedAssignment { name,
                                         ty,
                                         value,
                                         line, } => {
                let value = self.eval_child(value, *line)?;
                Ok(Some(self.eval_typed_assignment(name, *ty, value, *line)?))
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval_child(value, *line)?;
                Ok(Some(self.eval_assignment(name, value, *line)?))
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }
}
