use crate::{
    ast::{BinaryOperator, ElseBranch, Expr, IfStatement, LiteralValue, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Many evaluation paths require the same sequence:
    /// evaluate the expression, check for `None`, and report a `MissingValue`
    /// error when the expression yields nothing. The only expression that can
    /// yield nothing is a call of a function whose body produced no value.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The evaluated `Value`.
    ///
    /// # Example
    /// ```
    /// use lip::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let expr = Expr::Literal { value: 10.into(),
    ///                            line:  1, };
    ///
    /// let v = ctx.eval_child(&expr, 1).unwrap();
    /// assert_eq!(v, Value::Integer(10));
    /// ```
    pub fn eval_child(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(expr)?.ok_or(RuntimeError::MissingValue { line })
    }

    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value` and returns it.
    /// Literals never produce errors.
    ///
    /// # Example
    /// ```
    /// use lip::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let value = Context::eval_literal(&'a'.into()).unwrap();
    /// assert_eq!(value, Some(Value::Char(Some('a'))));
    /// ```
    #[allow(clippy::unnecessary_wraps)]
    pub fn eval_literal(value: &LiteralValue) -> EvalResult<Option<Value>> {
        Ok(Some(Value::from(value)))
    }

    /// Looks up a variable in the active environment.
    ///
    /// Only the active environment is searched: inside a function body the
    /// caller's variables are not visible.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if the name is not bound.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Option<Value>> {
        self.env
            .get(name)
            .cloned()
            .map(Some)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates both operands of a binary operation, left first, and applies
    /// the operator.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Option<Value>> {
        let left = self.eval_child(left, line)?;
        let right = self.eval_child(right, line)?;

        Ok(Some(Self::eval_binary(op, &left, &right, line)?))
    }

    /// Evaluates the arguments of a call in order and dispatches it to a
    /// built-in or user-defined function.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Option<Value>> {
        let mut arg_vals = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_vals.push(self.eval_child(argument, line)?);
        }

        self.eval_function(name, arg_vals, line)
    }

    /// Evaluates a conditional and its `elf`/`el` chain.
    ///
    /// The first branch whose condition is truthy runs; its last statement's
    /// value is the result. Without a matching branch the result is `None`.
    ///
    /// # Example
    /// ```
    /// use lip::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     run,
    /// };
    ///
    /// let mut context = Context::with_io(Box::new(Vec::new()), Box::new(std::io::empty()));
    /// let result = run("if 0 { 1 } elf 2 > 1 { 2 } el { 3 }", &mut context).unwrap();
    ///
    /// assert_eq!(result, Some(Value::Integer(2)));
    /// ```
    pub fn eval_if(&mut self, statement: &IfStatement) -> EvalResult<Option<Value>> {
        let condition = self.eval_child(&statement.condition, statement.line)?;

        if condition.is_truthy() {
            return self.eval_block(&statement.body);
        }

        match &statement.else_branch {
            ElseBranch::None => Ok(None),
            ElseBranch::Block(body) => self.eval_block(body),
            ElseBranch::ElseIf(next) => self.eval_if(next),
        }
    }

    /// Evaluates a block of statements in order.
    ///
    /// Blocks share the active environment; they do not open a scope of their
    /// own. The value of the last statement is returned, or `None` if the
    /// block is empty.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut last = None;

        for stmt in statements {
            last = self.eval_statement(stmt)?;
        }

        Ok(last)
    }

    /// Evaluates a sequence of top-level statements.
    ///
    /// The value of the final statement is returned, or `None` if the list is
    /// empty or the final statement yields nothing. A top-level `return` does
    /// not stop the program.
    ///
    /// # Example
    /// ```
    /// use lip::{
    ///     ast::{Expr, Statement},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    ///
    /// let statements = vec![Statement::Assignment { name:  "a".to_string(),
    ///                                               value: Expr::Literal { value: 10.into(),
    ///                                                                      line:  1, },
    ///                                               line:  1, },
    ///                       Statement::Expression { expr: Expr::Variable { name: "a".into(),
    ///                                                                      line: 1, },
    ///                                               line: 1, }];
    ///
    /// let r = context.eval_toplevel(&statements).unwrap();
    /// assert_eq!(r, Some(Value::Integer(10)));
    /// ```
    pub fn eval_toplevel(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        self.eval_block(statements)
    }
}

/// Checks if the argument list of `name` matches the expected count.
/// Returns an error if the argument count does not match.
///
/// ## Example
/// ```
/// use lip::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let arg_vals = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity("f", &arg_vals, 2, 15).is_ok());
/// assert!(check_arity("f", &arg_vals, 1, 15).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found: args.len(),
                                                  line })
    }
}
