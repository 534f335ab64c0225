#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// Description of the token encountered.
        found:    String,
        /// Description of what the grammar expected at this point.
        expected: String,
        /// The 1-based column of the unexpected token.
        column:   usize,
    },
    /// Reached the end of the line while a construct was still open.
    UnexpectedEndOfInput {
        /// Description of what the grammar expected at this point.
        expected: String,
        /// The column just past the last token.
        column:   usize,
    },
    /// Nesting went deeper than the configured parse-depth ceiling.
    DepthExceeded {
        /// The ceiling that was hit.
        limit:  usize,
        /// The column where the parser gave up.
        column: usize,
    },
    /// A function with the same name already exists in the session.
    FunctionAlreadyDefined {
        /// The name of the function.
        name:   String,
        /// The column of the function name in the declaration.
        column: usize,
    },
    /// A parameter name is repeated in a function declaration.
    DuplicateParameter {
        /// The repeated parameter name.
        name:   String,
        /// The column of the second occurrence.
        column: usize,
    },
    /// The body of a function declaration can never produce a value.
    UninferableBody {
        /// The name of the function.
        name:   String,
        /// The column of the function name in the declaration.
        column: usize,
    },
}

impl ParseError {
    /// Returns the column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::DepthExceeded { column, .. }
            | Self::FunctionAlreadyDefined { column, .. }
            | Self::DuplicateParameter { column, .. }
            | Self::UninferableBody { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    column, } => write!(f,
                                                        "! SYNTAX ERROR: Unexpected {found}, expected {expected} (column {column})"),

            Self::UnexpectedEndOfInput { expected, column } => write!(f,
                                                                      "! SYNTAX ERROR: Unexpected end of input, expected {expected} (column {column})"),

            Self::DepthExceeded { limit, column } => write!(f,
                                                            "! SYNTAX ERROR: Expression nested deeper than {limit} levels (column {column})"),

            Self::FunctionAlreadyDefined { name, column } => write!(f,
                                                                    "! SEMANTIC ERROR: Function \"{name}\" is already defined (column {column})"),

            Self::DuplicateParameter { name, column } => write!(f,
                                                                "! SEMANTIC ERROR: Parameter \"{name}\" is declared more than once (column {column})"),

            Self::UninferableBody { name, column } => write!(f,
                                                             "! SEMANTIC ERROR: The body of function \"{name}\" does not have a valid type (column {column})"),
        }
    }
}

impl std::error::Error for ParseError {}
