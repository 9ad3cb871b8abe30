use crate::{
    ast::ForLoop,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a `for` loop.
    ///
    /// `init` runs once. Then, as long as `condition` is truthy, the body
    /// runs followed by `update`. The loop variable lives in the active
    /// environment and keeps its final value after the loop.
    ///
    /// There is no `break`; only the condition ends the loop.
    ///
    /// # Returns
    /// Always `None`.
    ///
    /// # Example
    /// ```
    /// use lip::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     run,
    /// };
    ///
    /// let mut context = Context::with_io(Box::new(Vec::new()), Box::new(std::io::empty()));
    /// run("s = 0; for (i = 0; i < 4; i = i + 1) { s = s + i }", &mut context).unwrap();
    ///
    /// assert_eq!(context.env.get("s"), Some(&Value::Integer(6)));
    /// assert_eq!(context.env.get("i"), Some(&Value::Integer(4)));
    /// ```
    pub fn eval_for(&mut self, for_loop: &ForLoop) -> EvalResult<Option<Value>> {
        self.eval_statement(&for_loop.init)?;

        while self.eval_child(&for_loop.condition, for_loop.line)?
                  .is_truthy()
        {
            self.eval_block(&for_loop.body)?;
            self.eval_statement(&for_loop.update)?;
        }

        Ok(None)
    }
}
