use crate::{
    ast::{Expr, MathFunction},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Applies a one-argument math function.
///
/// Results follow IEEE-754: `sqrt` of a negative number is NaN.
///
/// # Example
/// ```
/// use hulk::{
///     ast::MathFunction,
///     interpreter::{evaluator::function::builtin::math, value::core::Value},
/// };
///
/// let v = math(MathFunction::Cos, &Value::Number(0.0), 1).unwrap();
/// assert_eq!(v, Value::Number(1.0));
///
/// assert!(math(MathFunction::Sin, &Value::from("x"), 1).is_err());
/// ```
///
/// # Errors
/// `MathArgument` if `value` is not a number.
pub fn math(function: MathFunction, value: &Value, column: usize) -> EvalResult<Value> {
    let x = expect_number(function.name(), value, column)?;
    Ok(Value::Number(function.apply(x)))
}

/// Computes the logarithm of `argument` in base `base`.
///
/// The base must be positive and different from 1, and the argument must
/// be positive.
///
/// # Example
/// ```
/// use hulk::interpreter::{evaluator::function::builtin::log, value::core::Value};
///
/// let v = log(&Value::Number(2.0), &Value::Number(8.0), 1).unwrap();
/// assert_eq!(v, Value::Number(3.0));
///
/// assert!(log(&Value::Number(1.0), &Value::Number(8.0), 1).is_err());
/// assert!(log(&Value::Number(2.0), &Value::Number(0.0), 1).is_err());
/// ```
///
/// # Errors
/// `MathArgument` for non-numeric inputs, `LogDomain` outside the domain.
pub fn log(base: &Value, argument: &Value, column: usize) -> EvalResult<Value> {
    let base = expect_number("log", base, column)?;
    let argument = expect_number("log", argument, column)?;

    let details = if base <= 0.0 {
        Some("base must be positive")
    } else if base == 1.0 {
        Some("base cannot be 1")
    } else if argument <= 0.0 {
        Some("argument must be positive")
    } else {
        None
    };
    if let Some(details) = details {
        return Err(RuntimeError::LogDomain { details, column });
    }

    Ok(Value::Number(argument.log(base)))
}

fn expect_number(function: &'static str, value: &Value, column: usize) -> EvalResult<f64> {
    value.as_number()
         .ok_or_else(|| RuntimeError::MathArgument { function,
                                                     found: value.type_name(),
                                                     column })
}

impl Context {
    pub(in crate::interpreter::evaluator) fn eval_math_call(&mut self,
                                                            function: MathFunction,
                                                            argument: &Expr,
                                                            column: usize)
                                                            -> EvalResult<Value> {
        let value = self.eval(argument)?;
        math(function, &value, column)
    }

    pub(in crate::interpreter::evaluator) fn eval_log(&mut self,
                                                      base: &Expr,
                                                      argument: &Expr,
                                                      column: usize)
                                                      -> EvalResult<Value> {
        let base = self.eval(base)?;
        let argument = self.eval(argument)?;
        log(&base, &argument, column)
    }
}
