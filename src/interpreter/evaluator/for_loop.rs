use crate::{
    ast::{Expr, ForSource},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a `for` expression.
    ///
    /// A `for` expression binds a loop variable and evaluates the body once
    /// per element. Two forms are supported:
    ///
    /// 1. **Range form:** `for (i in range(a, b)) body` binds `a`, `a + 1`,
    ///    ..., `b - 1`. Both bounds must be integral.
    ///
    /// 2. **Vector form:** `for (x in v) body` binds each element of the
    ///    vector `v` in order.
    ///
    /// Each iteration runs in its own scope holding only the loop variable.
    /// The result is a string joining every iteration's value with newlines;
    /// a loop that never runs produces the empty string. Loops always ask for
    /// their result to be shown.
    ///
    /// # Parameters
    /// - `var`: Loop variable name.
    /// - `source`: What the loop iterates over.
    /// - `body`: Loop body.
    /// - `column`: Column for error reporting.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::{Expr, ForSource},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    ///
    /// // for (i in range(1, 4)) i
    /// let source = ForSource::Range { lower: Box::new(Expr::Number { value:  1.0,
    ///                                                                column: 1, }),
    ///                                 upper: Box::new(Expr::Number { value:  4.0,
    ///                                                                column: 1, }), };
    /// let body = Expr::Variable { name:   "i".into(),
    ///                             column: 1, };
    ///
    /// let result = context.eval_for("i", &source, &body, 1).unwrap();
    /// assert_eq!(result, Value::from("1\n2\n3"));
    /// ```
    ///
    /// # Errors
    /// Bound and lookup errors of the source, and the first error raised by
    /// the body.
    pub fn eval_for(&mut self,
                    var: &str,
                    source: &ForSource,
                    body: &Expr,
                    column: usize)
                    -> EvalResult<Value> {
        let elements: Vec<Value> = match source {
            ForSource::Range { lower, upper } => self.eval_range_values(lower, upper, column)?,
            ForSource::Vector { name, column } => self.lookup_vector(name, *column)?.to_vec(),
        };

        tracing::trace!(var, iterations = elements.len(), "for loop");
        self.print_requested = true;
        let mut lines = Vec::with_capacity(elements.len());
        for element in elements {
            self.environment.scopes.push_frame();
            self.environment.scopes.define(var, element);
            let result = self.eval(body);
            self.environment.scopes.pop_frame();
            lines.push(result?.to_string());
        }

        Ok(Value::Str(lines.join("\n")))
    }

    /// Evaluates `while (condition) body`.
    ///
    /// The condition is re-evaluated before every iteration and must produce
    /// a boolean. Like `for`, the result joins every iteration's value with
    /// newlines and is marked for display.
    pub(super) fn eval_while(&mut self, condition: &Expr, body: &Expr) -> EvalResult<Value> {
        self.print_requested = true;
        let mut lines = Vec::new();
        while self.eval_condition(condition)? {
            lines.push(self.eval(body)?.to_string());
        }
        tracing::trace!(iterations = lines.len(), "while loop");
        Ok(Value::Str(lines.join("\n")))
    }
}
