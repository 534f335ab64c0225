use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    ast::{Expr, LetBinding},
    config::Limits,
    diagnostics::Diagnostics,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, FunctionTable},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `RuntimeError` describing the deepest failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of evaluating one top-level expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The value produced, or `None` if evaluation failed.
    pub value:           Option<Value>,
    /// The error that stopped evaluation, if any.
    pub diagnostics:     Diagnostics,
    /// Whether the expression asked for its result to be shown via `print`.
    pub print_requested: bool,
}

/// Stores the interpreter session.
///
/// This struct holds the declared functions, the variable scopes of the
/// evaluation in progress, the resource limits and the random number
/// generator behind `rand()`.
///
/// ## Usage
///
/// `Context` is created once per session and passed to every parse and
/// evaluation. Functions declared while parsing one line stay available to
/// later lines; variable scopes are reset before each top-level evaluation.
#[derive(Debug)]
pub struct Context {
    /// Variables and functions.
    pub environment:            Environment,
    /// Depth and size ceilings.
    pub limits:                 Limits,
    pub(super) call_depth:      usize,
    pub(super) print_requested: bool,
    pub(super) rng:             StdRng,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a session with default limits and no declared functions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Creates a session with the given limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { environment: Environment::default(),
               limits,
               call_depth: 0,
               print_requested: false,
               rng: StdRng::from_entropy() }
    }

    /// Replaces the random number generator with one seeded from `seed`, so
    /// `rand()` produces a reproducible sequence.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Returns the functions declared in this session.
    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.environment.functions
    }

    /// Evaluates a top-level expression.
    ///
    /// Variable scopes and the call depth are reset first. A failure is
    /// reported as a single diagnostic instead of a value.
    ///
    /// # Example
    /// ```
    /// use hulk::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let expr = Expr::Variable { name:   "x".into(),
    ///                             column: 1, };
    ///
    /// let evaluation = context.evaluate(&expr);
    /// assert_eq!(evaluation.value, None);
    /// assert_eq!(evaluation.diagnostics.messages(),
    ///            vec!["! SEMANTIC ERROR: Variable \"x\" is not defined (column 1)"]);
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> Evaluation {
        self.environment.scopes.clear();
        self.call_depth = 0;
        self.print_requested = false;

        let mut diagnostics = Diagnostics::default();
        let value = match self.eval(expr) {
            Ok(value) => Some(value),
            Err(error) => {
                diagnostics.push(error);
                None
            },
        };

        Evaluation { value,
                     diagnostics,
                     print_requested: self.print_requested }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the recursive step behind [`Context::evaluate`]. It dispatches
    /// on the expression variant: literals, variables, operators, built-in
    /// calls, conditionals, `let`, function calls, loops and vectors.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised anywhere in `expr`. Every
    /// scope opened along the way has been closed again by then.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Constant { constant, .. } => Ok(Value::Number(constant.value())),
            Expr::Rand { .. } => Ok(Value::Number(self.rng.gen_range(0.0..1.0))),
            Expr::Variable { name, column } => self.eval_variable(name, *column),
            Expr::Paren { expr, .. } => self.eval(expr),
            Expr::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.print_requested = true;
                Ok(value)
            },
            Expr::UnaryOp { op, expr, column } => self.eval_unary_op(*op, expr, *column),
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => self.eval_binary_op(left, *op, right, *column),
            Expr::MathCall { function,
                             argument,
                             column, } => self.eval_math_call(*function, argument, *column),
            Expr::LogCall { base,
                            argument,
                            column, } => self.eval_log(base, argument, *column),
            Expr::If { condition,
                       then_branch,
                       elif_branches,
                       else_branch,
                       .. } => self.eval_if(condition, then_branch, elif_branches, else_branch),
            Expr::LetIn { bindings, body, .. } => self.eval_let_in(bindings, body),
            Expr::FunctionCall { name,
                                 arguments,
                                 column, } => self.eval_function_call(name, arguments, *column),
            Expr::For { var,
                        source,
                        body,
                        column, } => self.eval_for(var, source, body, *column),
            Expr::While { condition, body, .. } => self.eval_while(condition, body),
            Expr::Vector { elements, .. } => self.eval_vector_literal(elements),
            Expr::Range { lower,
                          upper,
                          column, } => self.eval_range(lower, upper, *column),
            Expr::Index { name,
                          index,
                          column, } => self.eval_index(name, index, *column),
            Expr::MethodCall { name,
                               method,
                               column, } => self.eval_method(name, *method, *column),
            Expr::Error { column } => Err(RuntimeError::InvalidExpression { column: *column }),
        }
    }

    /// Resolves a variable through the active scopes, innermost first.
    fn eval_variable(&self, name: &str, column: usize) -> EvalResult<Value> {
        self.environment
            .scopes
            .lookup(name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             column })
    }

    /// Evaluates a condition of `if`, `elif` or `while`.
    ///
    /// # Errors
    /// `ConditionNotBoolean` if the condition produces anything but a boolean.
    pub(super) fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        let value = self.eval(condition)?;
        value.as_bool()
             .ok_or_else(|| RuntimeError::ConditionNotBoolean { found:  value.type_name(),
                                                                column: condition.column(), })
    }

    /// Evaluates an `if` / `elif` / `else` chain.
    ///
    /// Conditions are tested in source order and only the selected branch is
    /// evaluated.
    fn eval_if(&mut self,
               condition: &Expr,
               then_branch: &Expr,
               elif_branches: &[(Expr, Expr)],
               else_branch: &Expr)
               -> EvalResult<Value> {
        if self.eval_condition(condition)? {
            return self.eval(then_branch);
        }
        for (condition, body) in elif_branches {
            if self.eval_condition(condition)? {
                return self.eval(body);
            }
        }
        self.eval(else_branch)
    }

    /// Evaluates `let ... in body` in a fresh scope.
    ///
    /// Bindings are evaluated in order into the same scope, so later values
    /// see earlier names. The scope is closed whether or not evaluation
    /// succeeds.
    fn eval_let_in(&mut self, bindings: &[LetBinding], body: &Expr) -> EvalResult<Value> {
        self.environment.scopes.push_frame();
        let result = self.eval_let_body(bindings, body);
        self.environment.scopes.pop_frame();
        result
    }

    fn eval_let_body(&mut self, bindings: &[LetBinding], body: &Expr) -> EvalResult<Value> {
        for binding in bindings {
            let value = self.eval(&binding.value)?;
            self.environment.scopes.define(&binding.name, value);
        }
        self.eval(body)
    }
}
