use crate::{
    ast::{BinaryOperator, Expr, ForSource, UnaryOperator, VectorMethod},
    interpreter::{environment::FunctionTable, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Best-effort classification of what an expression produces.
///
/// `Any` means the type depends on runtime values; `None` means the
/// expression can never produce a value (for example `"a" + 1`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InferredType {
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// A vector.
    Object,
    /// Unknown until runtime.
    Any,
    /// Uninferable: the expression always fails.
    None,
}

impl InferredType {
    /// Classifies a runtime value.
    ///
    /// # Example
    /// ```
    /// use hulk::interpreter::{infer::InferredType, value::core::Value};
    ///
    /// assert_eq!(InferredType::of_value(&Value::from(2.0)), InferredType::Number);
    /// assert_eq!(InferredType::of_value(&Value::from(vec![Value::from(1.0)])), InferredType::Object);
    /// ```
    #[must_use]
    pub const fn of_value(value: &Value) -> Self {
        match value {
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Str(_) => Self::String,
            Value::Vector(_) => Self::Object,
        }
    }

    /// Returns `true` if a value of type `other` may be used where `self` is
    /// required.
    #[must_use]
    pub fn accepts(self, other: Self) -> bool {
        self == Self::Any || other == Self::Any || self == other
    }

    /// Combines the types of two alternative branches.
    fn unify(self, other: Self) -> Self {
        match (self, other) {
            (Self::None, _) | (_, Self::None) => Self::None,
            (a, b) if a == b => a,
            _ => Self::Any,
        }
    }

    /// Returns `result` when `self` fits `required`, and `None` otherwise.
    fn require(self, required: Self, result: Self) -> Self {
        if self != Self::None && required.accepts(self) {
            result
        } else {
            Self::None
        }
    }
}

impl std::fmt::Display for InferredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bool => "Bool",
            Self::Number => "Number",
            Self::String => "String",
            Self::Object => "Object",
            Self::Any => "Any",
            Self::None => "None",
        };
        write!(f, "{name}")
    }
}

/// Infers the type of an expression.
///
/// Variables bound by an enclosing `let` or loop take the type of their
/// binding; any other variable is `Any`. Calls to declared functions take
/// the function's inferred return type.
///
/// # Parameters
/// - `expr`: Expression to classify.
/// - `functions`: The functions declared so far.
/// - `bound`: Names already known to be in scope, such as function
///   parameters, with their types.
///
/// # Example
/// ```
/// use hulk::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{environment::FunctionTable, infer::{InferredType, infer_type}},
/// };
///
/// let expr = Expr::BinaryOp { left:   Box::new(Expr::Str { value:  "a".into(),
///                                                          column: 1, }),
///                             op:     BinaryOperator::Add,
///                             right:  Box::new(Expr::Number { value:  1.0,
///                                                             column: 7, }),
///                             column: 5, };
///
/// assert_eq!(infer_type(&expr, &FunctionTable::default(), &[]), InferredType::None);
/// ```
#[must_use]
pub fn infer_type(expr: &Expr,
                  functions: &FunctionTable,
                  bound: &[(String, InferredType)])
                  -> InferredType {
    let mut inference = Inference { functions,
                                    scope: bound.to_vec() };
    inference.infer(expr)
}

/// Finds the type a parameter is required to have by its first constraining
/// use in a function body.
///
/// A use constrains the parameter when it appears directly as an operand
/// whose operator accepts a single type, for example `n` in `n > 1`. Uses
/// that accept anything, such as `print(n)` or `n @ "x"`, are skipped.
/// Returns `Any` when no use constrains it. Bindings that shadow the name
/// hide the uses inside their scope.
///
/// # Example
/// ```
/// use hulk::{
///     ast::{Expr, UnaryOperator},
///     interpreter::{environment::FunctionTable, infer::{InferredType, parameter_usage}},
/// };
///
/// let body = Expr::UnaryOp { op:     UnaryOperator::Not,
///                            expr:   Box::new(Expr::Variable { name:   "flag".into(),
///                                                              column: 2, }),
///                            column: 1, };
///
/// assert_eq!(parameter_usage(&body, "flag", &FunctionTable::default()), InferredType::Bool);
/// ```
#[must_use]
pub fn parameter_usage(body: &Expr, param: &str, functions: &FunctionTable) -> InferredType {
    first_usage(body, param, functions).unwrap_or(InferredType::Any)
}

struct Inference<'a> {
    functions: &'a FunctionTable,
    scope:     Vec<(String, InferredType)>,
}

impl Inference<'_> {
    fn lookup(&self, name: &str) -> InferredType {
        self.scope
            .iter()
            .rev()
            .find(|(bound, _)| bound == name)
            .map_or(InferredType::Any, |(_, ty)| *ty)
    }

    fn infer(&mut self, expr: &Expr) -> InferredType {
        ensure_sufficient_stack(|| self.infer_inner(expr))
    }

    fn infer_inner(&mut self, expr: &Expr) -> InferredType {
        use InferredType::{Any, Bool, Number, Object};

        match expr {
            Expr::Number { .. } | Expr::Constant { .. } | Expr::Rand { .. } => Number,
            Expr::Str { .. } => InferredType::String,
            Expr::Bool { .. } => Bool,
            Expr::Variable { name, .. } => self.lookup(name),
            Expr::Paren { expr, .. } | Expr::Print { expr, .. } => self.infer(expr),
            Expr::UnaryOp { op, expr, .. } => {
                let operand = self.infer(expr);
                match op {
                    UnaryOperator::Not => operand.require(Bool, Bool),
                    UnaryOperator::Plus | UnaryOperator::Negate => operand.require(Number, Number),
                }
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.infer(left);
                let right = self.infer(right);
                Self::infer_binary(*op, left, right)
            },
            Expr::MathCall { argument, .. } => self.infer(argument).require(Number, Number),
            Expr::LogCall { base, argument, .. } => {
                let base = self.infer(base).require(Number, Number);
                self.infer(argument).require(Number, base)
            },
            Expr::If { condition,
                       then_branch,
                       elif_branches,
                       else_branch,
                       .. } => {
                let mut result = self.infer(condition).require(Bool, Any);
                if result == InferredType::None {
                    return InferredType::None;
                }
                result = self.infer(then_branch);
                for (condition, body) in elif_branches {
                    if self.infer(condition).require(Bool, Any) == InferredType::None {
                        return InferredType::None;
                    }
                    result = result.unify(self.infer(body));
                }
                result.unify(self.infer(else_branch))
            },
            Expr::LetIn { bindings, body, .. } => {
                let mark = self.scope.len();
                for binding in bindings {
                    let ty = self.infer(&binding.value);
                    if ty == InferredType::None {
                        self.scope.truncate(mark);
                        return InferredType::None;
                    }
                    self.scope.push((binding.name.clone(), ty));
                }
                let result = self.infer(body);
                self.scope.truncate(mark);
                result
            },
            Expr::FunctionCall { name, arguments, .. } => {
                if arguments.iter().any(|argument| self.infer(argument) == InferredType::None) {
                    return InferredType::None;
                }
                self.functions.get(name).map_or(Any, |def| def.return_type)
            },
            Expr::For { var, source, body, .. } => {
                let element = match source {
                    ForSource::Range { lower, upper } => {
                        let lower = self.infer(lower).require(Number, Number);
                        self.infer(upper).require(Number, lower)
                    },
                    ForSource::Vector { .. } => Any,
                };
                if element == InferredType::None {
                    return InferredType::None;
                }
                self.scope.push((var.clone(), element));
                let body = self.infer(body);
                self.scope.pop();
                body.require(Any, InferredType::String)
            },
            Expr::While { condition, body, .. } => {
                let condition = self.infer(condition).require(Bool, InferredType::String);
                self.infer(body).require(Any, condition)
            },
            Expr::Vector { elements, .. } => {
                if elements.iter().any(|element| self.infer(element) == InferredType::None) {
                    InferredType::None
                } else {
                    Object
                }
            },
            Expr::Range { lower, upper, .. } => {
                let lower = self.infer(lower).require(Number, Object);
                self.infer(upper).require(Number, lower)
            },
            Expr::Index { index, .. } => self.infer(index).require(Number, Any),
            Expr::MethodCall { method, .. } => match method {
                VectorMethod::Size => Number,
                VectorMethod::Next | VectorMethod::Current => Any,
            },
            Expr::Error { .. } => InferredType::None,
        }
    }

    fn infer_binary(op: BinaryOperator,
                    left: InferredType,
                    right: InferredType)
                    -> InferredType {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        use InferredType::{Any, Bool, Number};

        match op {
            Add | Sub | Mul | Div | Mod | Pow => {
                left.require(Number, right.require(Number, Number))
            },
            Less | Greater | LessEqual | GreaterEqual => {
                left.require(Number, right.require(Number, Bool))
            },
            And | Or => left.require(Bool, right.require(Bool, Bool)),
            Equal | NotEqual => left.require(Any, right.require(Any, Bool)),
            Concat => match (left, right) {
                (InferredType::None, _) | (_, InferredType::None) => InferredType::None,
                (Any | InferredType::String, _) | (_, Any | InferredType::String) => {
                    InferredType::String
                },
                _ => InferredType::None,
            },
        }
    }
}

/// Walks `expr` in evaluation order looking for the first use of `param`
/// that requires a specific type.
fn first_usage(expr: &Expr, param: &str, functions: &FunctionTable) -> Option<InferredType> {
    ensure_sufficient_stack(|| first_usage_inner(expr, param, functions))
}

fn first_usage_inner(expr: &Expr,
                     param: &str,
                     functions: &FunctionTable)
                     -> Option<InferredType> {
    use InferredType::{Bool, Number, Object};

    let constrained = |operand: &Expr, ty: InferredType| {
        if names_param(operand, param) {
            Some(ty)
        } else {
            first_usage(operand, param, functions)
        }
    };

    match expr {
        Expr::Number { .. }
        | Expr::Str { .. }
        | Expr::Bool { .. }
        | Expr::Constant { .. }
        | Expr::Variable { .. }
        | Expr::Rand { .. }
        | Expr::Error { .. } => None,
        Expr::Paren { expr, .. } | Expr::Print { expr, .. } => {
            first_usage(expr, param, functions)
        },
        Expr::UnaryOp { op, expr, .. } => match op {
            UnaryOperator::Not => constrained(expr, Bool),
            UnaryOperator::Plus | UnaryOperator::Negate => constrained(expr, Number),
        },
        Expr::BinaryOp { left, op, right, .. } => {
            let required = match op {
                BinaryOperator::And | BinaryOperator::Or => Some(Bool),
                BinaryOperator::Concat | BinaryOperator::Equal | BinaryOperator::NotEqual => {
                    None
                },
                _ => Some(Number),
            };
            match required {
                Some(ty) => constrained(left, ty).or_else(|| constrained(right, ty)),
                None => first_usage(left, param, functions)
                                .or_else(|| first_usage(right, param, functions)),
            }
        },
        Expr::MathCall { argument, .. } => constrained(argument, Number),
        Expr::LogCall { base, argument, .. } => {
            constrained(base, Number).or_else(|| constrained(argument, Number))
        },
        Expr::If { condition,
                   then_branch,
                   elif_branches,
                   else_branch,
                   .. } => {
            constrained(condition, Bool).or_else(|| first_usage(then_branch, param, functions))
                                        .or_else(|| {
                                            elif_branches.iter().find_map(|(cond, branch)| {
                                                constrained(cond, Bool).or_else(|| {
                                                    first_usage(branch, param, functions)
                                                })
                                            })
                                        })
                                        .or_else(|| first_usage(else_branch, param, functions))
        },
        Expr::LetIn { bindings, body, .. } => {
            for binding in bindings {
                if let Some(ty) = first_usage(&binding.value, param, functions) {
                    return Some(ty);
                }
                if binding.name == param {
                    return None;
                }
            }
            first_usage(body, param, functions)
        },
        Expr::FunctionCall { name, arguments, .. } => {
            let callee = functions.get(name);
            arguments.iter().enumerate().find_map(|(i, argument)| {
                let required = callee.as_ref()
                                     .and_then(|def| def.param_types.get(i).copied())
                                     .filter(|ty| *ty != InferredType::Any);
                match required {
                    Some(ty) => constrained(argument, ty),
                    None => first_usage(argument, param, functions),
                }
            })
        },
        Expr::For { var, source, body, .. } => {
            let from_source = match source {
                ForSource::Range { lower, upper } => {
                    constrained(lower, Number).or_else(|| constrained(upper, Number))
                },
                ForSource::Vector { name, .. } => (name == param).then_some(Object),
            };
            if from_source.is_some() || var == param {
                return from_source;
            }
            first_usage(body, param, functions)
        },
        Expr::While { condition, body, .. } => {
            constrained(condition, Bool).or_else(|| first_usage(body, param, functions))
        },
        Expr::Vector { elements, .. } => {
            elements.iter().find_map(|element| first_usage(element, param, functions))
        },
        Expr::Range { lower, upper, .. } => {
            constrained(lower, Number).or_else(|| constrained(upper, Number))
        },
        Expr::Index { name, index, .. } => {
            if name == param {
                Some(Object)
            } else {
                constrained(index, Number)
            }
        },
        Expr::MethodCall { name, .. } => (name == param).then_some(Object),
    }
}

/// Returns `true` if `expr` is the parameter itself, possibly parenthesized.
fn names_param(expr: &Expr, param: &str) -> bool {
    match expr {
        Expr::Variable { name, .. } => name == param,
        Expr::Paren { expr, .. } => names_param(expr, param),
        _ => false,
    }
}
