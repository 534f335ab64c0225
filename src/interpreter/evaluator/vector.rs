use crate::{
    ast::{Expr, VectorMethod},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_usize_checked, len_to_f64},
};

impl Context {
    /// Evaluates the elements of `[a, b, ...]` in order.
    pub(super) fn eval_vector_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }

    /// Evaluates `range(lower, upper)` to the vector `[lower, ..., upper - 1]`.
    pub(super) fn eval_range(&mut self,
                             lower: &Expr,
                             upper: &Expr,
                             column: usize)
                             -> EvalResult<Value> {
        let values = self.eval_range_values(lower, upper, column)?;
        Ok(Value::from(values))
    }

    /// Evaluates `name[index]`.
    ///
    /// Indices are zero-based and must be non-negative integers.
    ///
    /// # Errors
    /// - `UndefinedVariable` or `NotAVector` for the name.
    /// - `InvalidIndex` for a fractional, negative or non-numeric index.
    /// - `IndexOutOfBounds` past the last element.
    pub(super) fn eval_index(&mut self,
                             name: &str,
                             index: &Expr,
                             column: usize)
                             -> EvalResult<Value> {
        let elements = self.lookup_vector(name, column)?;
        let index = self.eval(index)?;
        let invalid = || RuntimeError::InvalidIndex { index: index.to_string(),
                                                      column };
        let position = index.as_number().ok_or_else(invalid)?;
        let position = f64_to_usize_checked(position, ()).map_err(|()| invalid())?;

        elements.get(position)
                .cloned()
                .ok_or_else(|| RuntimeError::IndexOutOfBounds { name: name.to_string(),
                                                                index: position,
                                                                len: elements.len(),
                                                                column })
    }

    /// Evaluates `name.next()`, `name.current()` or `name.size()`.
    ///
    /// Every vector binding carries a cursor that starts before the first
    /// element. `next()` advances it and returns the element it lands on;
    /// `current()` returns the element under it without moving. A failed
    /// `next()` leaves the cursor where it was.
    ///
    /// # Errors
    /// - `UndefinedVariable` or `NotAVector` for the name.
    /// - `CursorExhausted` when `next()` would move past the last element.
    /// - `CursorNotStarted` when `current()` is called before any `next()`.
    pub(super) fn eval_method(&mut self,
                              name: &str,
                              method: VectorMethod,
                              column: usize)
                              -> EvalResult<Value> {
        let elements = self.lookup_vector(name, column)?;
        let Some(binding) = self.environment.scopes.lookup_mut(name) else {
            return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                         column });
        };

        match method {
            VectorMethod::Size => Ok(Value::Number(len_to_f64(elements.len()))),
            VectorMethod::Next => {
                let next = binding.cursor.map_or(0, |cursor| cursor + 1);
                let Some(element) = elements.get(next) else {
                    return Err(RuntimeError::CursorExhausted { name: name.to_string(),
                                                               column });
                };
                binding.cursor = Some(next);
                Ok(element.clone())
            },
            VectorMethod::Current => binding.cursor
                                            .and_then(|cursor| elements.get(cursor))
                                            .cloned()
                                            .ok_or_else(|| RuntimeError::CursorNotStarted {
                                                name: name.to_string(),
                                                column,
                                            }),
        }
    }
}
