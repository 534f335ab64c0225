use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

impl Context {
    /// Evaluates `range(lower, upper)` to its values `lower, ..., upper - 1`.
    ///
    /// Both bounds must be integral numbers. The range is half-open and empty
    /// when `upper <= lower`.
    ///
    /// # Errors
    /// - `InvalidRangeBound` for a non-integral or non-numeric bound.
    /// - `RangeTooLong` when the range holds more than
    ///   `Limits::max_range_len` values.
    pub(super) fn eval_range_values(&mut self,
                                    lower: &Expr,
                                    upper: &Expr,
                                    column: usize)
                                    -> EvalResult<Vec<Value>> {
        let lower = self.eval(lower)?;
        let upper = self.eval(upper)?;
        let lower = integral_bound(&lower, column)?;
        let upper = integral_bound(&upper, column)?;

        let len = usize::try_from(upper.saturating_sub(lower)).unwrap_or(0);
        if len > self.limits.max_range_len {
            return Err(RuntimeError::RangeTooLong { len,
                                                    limit: self.limits.max_range_len,
                                                    column });
        }

        (lower..upper).map(|i| {
                          i64_to_f64_checked(i, ()).map(Value::Number).map_err(|()| {
                              RuntimeError::InvalidRangeBound { value: i.to_string(),
                                                                column }
                          })
                      })
                      .collect()
    }

    /// Resolves `name` to the elements of the vector it is bound to.
    ///
    /// # Errors
    /// `UndefinedVariable` if the name is unbound, `NotAVector` if it holds
    /// anything else.
    pub(super) fn lookup_vector(&self, name: &str, column: usize) -> EvalResult<Rc<Vec<Value>>> {
        let Some(binding) = self.environment.scopes.lookup(name) else {
            return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                         column });
        };
        binding.value
               .as_vector()
               .cloned()
               .ok_or_else(|| RuntimeError::NotAVector { name: name.to_string(),
                                                         column })
    }
}

fn integral_bound(value: &Value, column: usize) -> EvalResult<i64> {
    let invalid = || RuntimeError::InvalidRangeBound { value: value.to_string(),
                                                       column };
    let n = value.as_number().ok_or_else(invalid)?;
    f64_to_i64_checked(n, ()).map_err(|()| invalid())
}
