use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Bool(true);
    /// let b = Value::Bool(false);
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    ///
    /// # Errors
    /// `OperatorType` unless both operands are booleans.
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      column: usize)
                      -> EvalResult<Value> {
        let (Value::Bool(a), Value::Bool(b)) = (left, right) else {
            return Err(RuntimeError::OperatorType { operator: op.symbol(),
                                                    left: left.type_name(),
                                                    right: right.type_name(),
                                                    column });
        };

        match op {
            BinaryOperator::And => Ok(Value::Bool(*a && *b)),
            BinaryOperator::Or => Ok(Value::Bool(*a || *b)),
            _ => unreachable!(),
        }
    }
}
