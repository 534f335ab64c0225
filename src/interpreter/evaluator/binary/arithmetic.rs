use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies an arithmetic operator to two numbers.
    ///
    /// Division follows IEEE-754, so dividing by zero yields an infinity or
    /// NaN rather than an error. `%` keeps the sign of the dividend and `^`
    /// is `powf`.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::Pow,
    ///                                  &Value::Number(2.0),
    ///                                  &Value::Number(10.0),
    ///                                  1).unwrap();
    /// assert_eq!(v, Value::Number(1024.0));
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::Div,
    ///                                  &Value::Number(1.0),
    ///                                  &Value::Number(0.0),
    ///                                  1).unwrap();
    /// assert_eq!(v, Value::Number(f64::INFINITY));
    /// ```
    ///
    /// # Errors
    /// `OperatorType` unless both operands are numbers.
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           column: usize)
                           -> EvalResult<Value> {
        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(RuntimeError::OperatorType { operator: op.symbol(),
                                                    left: left.type_name(),
                                                    right: right.type_name(),
                                                    column });
        };

        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => a / b,
            BinaryOperator::Mod => a % b,
            BinaryOperator::Pow => a.powf(*b),
            _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
        };
        Ok(Value::Number(result))
    }
}
