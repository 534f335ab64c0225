use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Relational operators (`<`, `>`, `<=`, `>=`) accept numbers only.
    /// Equality (`==`, `!=`) compares two numbers, two booleans or two
    /// strings; mixing kinds is a type error, not `false`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `column`: Column used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::from("a"),
    ///                                       &Value::from("a"),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    ///
    /// # Errors
    /// `OperatorType` when the operand types are not comparable with `op`.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           column: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let mismatch = || RuntimeError::OperatorType { operator: op.symbol(),
                                                       left: left.type_name(),
                                                       right: right.type_name(),
                                                       column };

        let result = match op {
            Equal | NotEqual => {
                let equal = match (left, right) {
                    (Value::Number(a), Value::Number(b)) => a == b,
                    (Value::Bool(a), Value::Bool(b)) => a == b,
                    (Value::Str(a), Value::Str(b)) => a == b,
                    _ => return Err(mismatch()),
                };
                if op == Equal { equal } else { !equal }
            },
            Less | Greater | LessEqual | GreaterEqual => {
                let (Value::Number(a), Value::Number(b)) = (left, right) else {
                    return Err(mismatch());
                };
                match op {
                    Less => a < b,
                    Greater => a > b,
                    LessEqual => a <= b,
                    _ => a >= b,
                }
            },
            _ => unreachable!("eval_comparison used with non comparison operator"),
        };
        Ok(Value::Bool(result))
    }
}
