use crate::interpreter::infer::InferredType;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every construct of the language, from literals and variables
/// to function calls, conditionals, loops and vectors. Each variant models a
/// distinct syntactic construct and records the 1-based column of the token
/// that starts it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `2.5`.
    Number {
        /// The literal value.
        value:  f64,
        /// Column in the source line.
        column: usize,
    },
    /// A string literal, already unescaped.
    Str {
        /// The literal content without quotes.
        value:  String,
        /// Column in the source line.
        column: usize,
    },
    /// A boolean literal: `true` or `false`.
    Bool {
        /// The literal value.
        value:  bool,
        /// Column in the source line.
        column: usize,
    },
    /// A named constant such as `PI`.
    Constant {
        /// Which constant.
        constant: MathConstant,
        /// Column in the source line.
        column:   usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Column in the source line.
        column: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column in the source line.
        column: usize,
    },
    /// A binary operation (addition, concatenation, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator.
        column: usize,
    },
    /// A parenthesized expression.
    Paren {
        /// The inner expression.
        expr:   Box<Self>,
        /// Column of the opening parenthesis.
        column: usize,
    },
    /// `print(expr)`: evaluates to `expr` and asks the front end to show it.
    Print {
        /// The expression to print.
        expr:   Box<Self>,
        /// Column in the source line.
        column: usize,
    },
    /// A call to a one-argument math function (e.g. `sin(x)`).
    MathCall {
        /// The function being called.
        function: MathFunction,
        /// The argument expression.
        argument: Box<Self>,
        /// Column in the source line.
        column:   usize,
    },
    /// `log(base, argument)`.
    LogCall {
        /// The base of the logarithm.
        base:     Box<Self>,
        /// The value whose logarithm is taken.
        argument: Box<Self>,
        /// Column in the source line.
        column:   usize,
    },
    /// `rand()`: a uniform random number in `[0, 1)`.
    Rand {
        /// Column in the source line.
        column: usize,
    },
    /// Conditional expression with optional `elif` branches.
    If {
        /// The primary condition expression.
        condition:     Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch:   Box<Self>,
        /// `(condition, body)` pairs tested in source order.
        elif_branches: Vec<(Self, Self)>,
        /// Expression evaluated when no condition holds.
        else_branch:   Box<Self>,
        /// Column in the source line.
        column:        usize,
    },
    /// `let name = value, ... in body`.
    LetIn {
        /// The bindings, in declaration order.
        bindings: Vec<LetBinding>,
        /// The body evaluated with all bindings in scope.
        body:     Box<Self>,
        /// Column in the source line.
        column:   usize,
    },
    /// Call to a user-defined function (e.g. `fib(6)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Column in the source line.
        column:    usize,
    },
    /// `for (var in source) body`.
    For {
        /// The loop variable name.
        var:    String,
        /// What the loop iterates over.
        source: ForSource,
        /// The body evaluated once per element.
        body:   Box<Self>,
        /// Column in the source line.
        column: usize,
    },
    /// `while (condition) body`.
    While {
        /// Condition re-evaluated before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Column in the source line.
        column:    usize,
    },
    /// Vector literal expression (e.g. `[1, 2, 3]`).
    Vector {
        /// Elements of the vector.
        elements: Vec<Self>,
        /// Column in the source line.
        column:   usize,
    },
    /// `range(lower, upper)`: the half-open sequence `[lower, upper)`.
    Range {
        /// Inclusive lower bound.
        lower:  Box<Self>,
        /// Exclusive upper bound.
        upper:  Box<Self>,
        /// Column in the source line.
        column: usize,
    },
    /// Vector indexing expression (e.g. `v[2]`).
    Index {
        /// Name of the vector variable.
        name:   String,
        /// The index to access.
        index:  Box<Self>,
        /// Column in the source line.
        column: usize,
    },
    /// A method call on a vector variable (e.g. `v.next()`).
    MethodCall {
        /// Name of the vector variable.
        name:   String,
        /// The method being called.
        method: VectorMethod,
        /// Column in the source line.
        column: usize,
    },
    /// Placeholder left where a syntax error was recovered from.
    Error {
        /// Column of the offending token.
        column: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use hulk::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             column: 5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Number { column, .. }
            | Self::Str { column, .. }
            | Self::Bool { column, .. }
            | Self::Constant { column, .. }
            | Self::Variable { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. }
            | Self::Paren { column, .. }
            | Self::Print { column, .. }
            | Self::MathCall { column, .. }
            | Self::LogCall { column, .. }
            | Self::Rand { column }
            | Self::If { column, .. }
            | Self::LetIn { column, .. }
            | Self::FunctionCall { column, .. }
            | Self::For { column, .. }
            | Self::While { column, .. }
            | Self::Vector { column, .. }
            | Self::Range { column, .. }
            | Self::Index { column, .. }
            | Self::MethodCall { column, .. }
            | Self::Error { column } => *column,
        }
    }
}

impl Expr {
    /// Moves every direct child of `self` into `pending`, leaving cheap leaves
    /// in their place.
    fn take_children(&mut self, pending: &mut Vec<Self>) {
        let mut take = |child: &mut Box<Self>| {
            pending.push(std::mem::replace(&mut **child, Self::Error { column: 0 }));
        };

        match self {
            Self::Number { .. }
            | Self::Str { .. }
            | Self::Bool { .. }
            | Self::Constant { .. }
            | Self::Variable { .. }
            | Self::Rand { .. }
            | Self::MethodCall { .. }
            | Self::Error { .. } => {},
            Self::UnaryOp { expr, .. } | Self::Paren { expr, .. } | Self::Print { expr, .. } => {
                take(expr);
            },
            Self::MathCall { argument, .. } => take(argument),
            Self::Index { index, .. } => take(index),
            Self::BinaryOp { left, right, .. } => {
                take(left);
                take(right);
            },
            Self::LogCall { base, argument, .. } => {
                take(base);
                take(argument);
            },
            Self::Range { lower, upper, .. } => {
                take(lower);
                take(upper);
            },
            Self::While { condition, body, .. } => {
                take(condition);
                take(body);
            },
            Self::If { condition,
                       then_branch,
                       elif_branches,
                       else_branch,
                       .. } => {
                take(condition);
                take(then_branch);
                take(else_branch);
                for (condition, body) in std::mem::take(elif_branches) {
                    pending.push(condition);
                    pending.push(body);
                }
            },
            Self::LetIn { bindings, body, .. } => {
                take(body);
                pending.extend(std::mem::take(bindings).into_iter().map(|binding| binding.value));
            },
            Self::For { source, body, .. } => {
                take(body);
                if let ForSource::Range { lower, upper } = source {
                    take(lower);
                    take(upper);
                }
            },
            Self::FunctionCall { arguments, .. } => pending.append(arguments),
            Self::Vector { elements, .. } => pending.append(elements),
        }
    }
}

/// Drops a tree without recursing, so a long operator chain such as
/// `x + x + ... + x` cannot exhaust the native stack when it is freed.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

/// One `name = value` pair of a `let` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct LetBinding {
    /// The variable name.
    pub name:   String,
    /// The value expression.
    pub value:  Expr,
    /// Column of the name.
    pub column: usize,
}

/// What a `for` loop iterates over.
#[derive(Debug, Clone, PartialEq)]
pub enum ForSource {
    /// `range(lower, upper)`.
    Range {
        /// Inclusive lower bound.
        lower: Box<Expr>,
        /// Exclusive upper bound.
        upper: Box<Expr>,
    },
    /// A variable bound to a vector.
    Vector {
        /// Name of the vector variable.
        name:   String,
        /// Column of the name.
        column: usize,
    },
}

/// Represents a user-defined function definition.
///
/// Parameter and return types are inferred once, when the declaration is
/// parsed, and checked against the arguments of every call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:        String,
    /// The parameter names.
    pub params:      Vec<String>,
    /// The type each parameter is first used as in the body.
    pub param_types: Vec<InferredType>,
    /// The inferred type of the body.
    pub return_type: InferredType,
    /// The body expression evaluated when the function is called.
    pub body:        Expr,
    /// Column of the function name.
    pub column:      usize,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, concatenation, comparisons and logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// String concatenation (`@`)
    Concat,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

impl BinaryOperator {
    /// Returns the binding power of the operator; higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use hulk::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Mod.precedence(), BinaryOperator::Equal.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 6,
            Self::Mul | Self::Div => 4,
            Self::Add | Self::Sub | Self::Concat => 3,
            Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual
            | Self::Mod => 2,
            Self::And | Self::Or => 1,
        }
    }

    /// Returns `true` for operators that group from the right (`^`).
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Concat => "@",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&",
            Self::Or => "|",
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl UnaryOperator {
    /// Returns the binding power used for the operand.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Negate => 5,
            Self::Not => 1,
        }
    }

    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

/// Built-in one-argument math functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Square root.
    Sqrt,
    /// Natural exponential.
    Exp,
}

impl MathFunction {
    /// Applies the function to `x`.
    ///
    /// # Example
    /// ```
    /// use hulk::ast::MathFunction;
    ///
    /// assert_eq!(MathFunction::Sqrt.apply(9.0), 3.0);
    /// ```
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Sqrt => x.sqrt(),
            Self::Exp => x.exp(),
        }
    }

    /// Returns the function name as written in source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
        }
    }
}

/// Named numeric constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathConstant {
    /// `PI`
    Pi,
    /// `E`
    E,
}

impl MathConstant {
    /// Returns the numeric value of the constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// Methods callable on a vector variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VectorMethod {
    /// `.next()`: advance the cursor and return the new current element.
    Next,
    /// `.current()`: return the element under the cursor.
    Current,
    /// `.size()`: return the number of elements.
    Size,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for MathFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for MathConstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pi => "PI",
            Self::E => "E",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for VectorMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Next => "next",
            Self::Current => "current",
            Self::Size => "size",
        };
        write!(f, "{name}")
    }
}
