use crate::interpreter::infer::InferredType;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The column of the reference.
        column: usize,
    },
    /// Called a function that has not been declared.
    UndefinedFunction {
        /// The name of the function.
        name:   String,
        /// The column of the call.
        column: usize,
    },
    /// Called a function with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The column of the call.
        column:   usize,
    },
    /// An argument's type does not fit how the body uses the parameter.
    ArgumentType {
        /// The name of the function.
        function:  String,
        /// The name of the parameter.
        parameter: String,
        /// The type the body requires.
        expected:  InferredType,
        /// The type of the supplied value.
        found:     InferredType,
        /// The column of the call.
        column:    usize,
    },
    /// Function calls nested deeper than the configured ceiling.
    StackOverflow {
        /// The ceiling that was hit.
        limit:  usize,
        /// The column of the call that overflowed.
        column: usize,
    },
    /// A binary operator was applied to operands of unsupported types.
    OperatorType {
        /// The operator symbol.
        operator: &'static str,
        /// The type name of the left operand.
        left:     &'static str,
        /// The type name of the right operand.
        right:    &'static str,
        /// The column of the expression.
        column:   usize,
    },
    /// A unary operator was applied to an operand of an unsupported type.
    UnaryOperatorType {
        /// The operator symbol.
        operator: &'static str,
        /// The type name of the operand.
        operand:  &'static str,
        /// The column of the expression.
        column:   usize,
    },
    /// Neither side of `@` is a string.
    ConcatenationType {
        /// The column of the expression.
        column: usize,
    },
    /// A condition of `if`, `elif` or `while` did not produce a boolean.
    ConditionNotBoolean {
        /// The type name of the value produced.
        found:  &'static str,
        /// The column of the condition.
        column: usize,
    },
    /// A math function received a non-numeric argument.
    MathArgument {
        /// The function name.
        function: &'static str,
        /// The type name of the value received.
        found:    &'static str,
        /// The column of the call.
        column:   usize,
    },
    /// A logarithm outside its domain.
    LogDomain {
        /// Why the logarithm is undefined.
        details: &'static str,
        /// The column of the call.
        column:  usize,
    },
    /// A name used as a vector is bound to something else.
    NotAVector {
        /// The name of the variable.
        name:   String,
        /// The column of the reference.
        column: usize,
    },
    /// An index was not a non-negative integer.
    InvalidIndex {
        /// Display form of the index value.
        index:  String,
        /// The column of the indexing expression.
        column: usize,
    },
    /// An index was past the end of the vector.
    IndexOutOfBounds {
        /// The name of the vector.
        name:   String,
        /// The index requested.
        index:  usize,
        /// The number of elements in the vector.
        len:    usize,
        /// The column of the indexing expression.
        column: usize,
    },
    /// `next()` was called on a vector whose cursor is at the last element.
    CursorExhausted {
        /// The name of the vector.
        name:   String,
        /// The column of the call.
        column: usize,
    },
    /// `current()` was called before any `next()`.
    CursorNotStarted {
        /// The name of the vector.
        name:   String,
        /// The column of the call.
        column: usize,
    },
    /// A range or loop bound was not an integral number.
    InvalidRangeBound {
        /// Display form of the bound.
        value:  String,
        /// The column of the range.
        column: usize,
    },
    /// A range would produce more elements than allowed.
    RangeTooLong {
        /// The requested number of elements.
        len:    usize,
        /// The configured maximum.
        limit:  usize,
        /// The column of the range.
        column: usize,
    },
    /// Evaluated a placeholder left behind by a syntax error.
    InvalidExpression {
        /// The column of the placeholder.
        column: usize,
    },
}

impl RuntimeError {
    /// Returns the column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UndefinedVariable { column, .. }
            | Self::UndefinedFunction { column, .. }
            | Self::ArityMismatch { column, .. }
            | Self::ArgumentType { column, .. }
            | Self::StackOverflow { column, .. }
            | Self::OperatorType { column, .. }
            | Self::UnaryOperatorType { column, .. }
            | Self::ConcatenationType { column }
            | Self::ConditionNotBoolean { column, .. }
            | Self::MathArgument { column, .. }
            | Self::LogDomain { column, .. }
            | Self::NotAVector { column, .. }
            | Self::InvalidIndex { column, .. }
            | Self::IndexOutOfBounds { column, .. }
            | Self::CursorExhausted { column, .. }
            | Self::CursorNotStarted { column, .. }
            | Self::InvalidRangeBound { column, .. }
            | Self::RangeTooLong { column, .. }
            | Self::InvalidExpression { column } => *column,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "! SEMANTIC ERROR: ")?;
        match self {
            Self::UndefinedVariable { name, .. } => write!(f, "Variable \"{name}\" is not defined"),

            Self::UndefinedFunction { name, .. } => write!(f, "Function \"{name}\" is not defined"),

            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  .. } => write!(f,
                                                 "Function \"{name}\" does not take {found} arguments, it takes {expected}"),

            Self::ArgumentType { function,
                                 parameter,
                                 expected,
                                 found,
                                 .. } => write!(f,
                                                "Argument \"{parameter}\" of function \"{function}\" must be {expected}, found {found}"),

            Self::StackOverflow { limit, .. } => {
                write!(f, "Stack overflow: more than {limit} nested function calls")
            },

            Self::OperatorType { operator,
                                 left,
                                 right,
                                 .. } => write!(f,
                                                "Operator '{operator}' cannot be used between '{left}' and '{right}'"),

            Self::UnaryOperatorType { operator, operand, .. } => {
                write!(f, "Operator '{operator}' cannot be applied to '{operand}'")
            },

            Self::ConcatenationType { .. } => {
                write!(f, "At least one of the elements to concatenate must be a string")
            },

            Self::ConditionNotBoolean { found, .. } => {
                write!(f, "Can't convert the given condition of type '{found}' to bool")
            },

            Self::MathArgument { function, found, .. } => {
                write!(f, "Function '{function}' expects a number, found '{found}'")
            },

            Self::LogDomain { details, .. } => write!(f, "Invalid logarithm: {details}"),

            Self::NotAVector { name, .. } => write!(f, "Variable \"{name}\" is not a vector"),

            Self::InvalidIndex { index, .. } => {
                write!(f, "Index must be a non-negative integer, found '{index}'")
            },

            Self::IndexOutOfBounds { name,
                                     index,
                                     len,
                                     .. } => write!(f,
                                                    "Index {index} is out of bounds for vector \"{name}\" of size {len}"),

            Self::CursorExhausted { name, .. } => {
                write!(f, "Vector \"{name}\" has no more elements")
            },

            Self::CursorNotStarted { name, .. } => {
                write!(f, "Vector \"{name}\" has no current element, call next() first")
            },

            Self::InvalidRangeBound { value, .. } => {
                write!(f, "Range bounds must be integers, found '{value}'")
            },

            Self::RangeTooLong { len, limit, .. } => {
                write!(f, "Range of {len} elements exceeds the limit of {limit}")
            },

            Self::InvalidExpression { .. } => write!(f, "Invalid expression"),
        }?;
        write!(f, " (column {})", self.column())
    }
}

impl std::error::Error for RuntimeError {}
