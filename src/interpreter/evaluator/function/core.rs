use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        infer::InferredType,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a call to a user-defined function.
    ///
    /// The function is looked up by name and its parameter count must match
    /// the number of arguments. Arguments are evaluated left to right in the
    /// caller's scope and checked against the parameter types inferred at
    /// declaration. The body is then evaluated in a new innermost scope that
    /// binds each parameter. Callers' scopes stay visible to the body.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `column`: Column of the call for error reporting.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - An argument whose type the body cannot use.
    /// - More nested calls than `Limits::max_call_depth`.
    pub(in crate::interpreter::evaluator) fn eval_function_call(&mut self,
                                                                name: &str,
                                                                arguments: &[Expr],
                                                                column: usize)
                                                                -> EvalResult<Value> {
        let Some(function) = self.environment.functions.get(name) else {
            return Err(RuntimeError::UndefinedFunction { name: name.to_string(),
                                                         column });
        };

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: function.params.len(),
                                                     found: arguments.len(),
                                                     column });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;
        check_argument_types(&function, &values, column)?;

        if self.call_depth >= self.limits.max_call_depth {
            return Err(RuntimeError::StackOverflow { limit: self.limits.max_call_depth,
                                                     column });
        }

        tracing::trace!(%name, depth = self.call_depth, "calling function");
        self.environment.scopes.push_frame();
        for (param, value) in function.params.iter().zip(values) {
            self.environment.scopes.define(param, value);
        }
        self.call_depth += 1;

        let result = self.eval(&function.body);

        self.call_depth -= 1;
        self.environment.scopes.pop_frame();
        result
    }
}

/// Checks each argument against the type its parameter is used as.
///
/// Parameters inferred as `Any` accept every value.
fn check_argument_types(function: &FunctionDef, values: &[Value], column: usize) -> EvalResult<()> {
    let parameters = function.params.iter().zip(&function.param_types);
    for ((param, expected), value) in parameters.zip(values) {
        let found = InferredType::of_value(value);
        if !expected.accepts(found) {
            return Err(RuntimeError::ArgumentType { function: function.name.clone(),
                                                    parameter: param.clone(),
                                                    expected: *expected,
                                                    found,
                                                    column });
        }
    }
    Ok(())
}
