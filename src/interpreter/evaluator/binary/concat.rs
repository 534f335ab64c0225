use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Concatenates two values with `@`.
    ///
    /// At least one side must be a string; the other side is converted with
    /// its display form, so `"life is" @ 42` is `"life is42"`.
    ///
    /// # Example
    /// ```
    /// use hulk::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let v = Context::eval_concat(&Value::from("life is"), &Value::Number(42.0), 1).unwrap();
    /// assert_eq!(v, Value::from("life is42"));
    ///
    /// assert!(Context::eval_concat(&Value::Number(1.0), &Value::Bool(true), 1).is_err());
    /// ```
    ///
    /// # Errors
    /// `ConcatenationType` when neither operand is a string.
    pub fn eval_concat(left: &Value, right: &Value, column: usize) -> EvalResult<Value> {
        if !matches!(left, Value::Str(_)) && !matches!(right, Value::Str(_)) {
            return Err(RuntimeError::ConcatenationType { column });
        }
        Ok(Value::Str(format!("{left}{right}")))
    }
}
