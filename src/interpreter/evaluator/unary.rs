use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the operand of a unary expression and applies the operator.
    pub(super) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Expr,
                                column: usize)
                                -> EvalResult<Value> {
        let value = self.eval(operand)?;
        Self::eval_unary(op, &value, column)
    }

    /// Applies a unary operator to a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity on numbers.
    /// - `Negate`: numeric negation.
    /// - `Not`: boolean negation.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `column`: Column for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Not, &Value::Number(1.0), 1).is_err());
    /// ```
    ///
    /// # Errors
    /// `UnaryOperatorType` when the operand has the wrong type.
    pub fn eval_unary(op: UnaryOperator, value: &Value, column: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Number(n)) => Ok(Value::Number(*n)),
            (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            _ => Err(RuntimeError::UnaryOperatorType { operator: op.symbol(),
                                                       operand: value.type_name(),
                                                       column }),
        }
    }
}
