use std::rc::Rc;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Vectors share
/// their elements behind an `Rc`, so binding or passing a vector never copies
/// it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by the
    /// conditions of `if`, `elif` and `while`.
    Bool(bool),
    /// A string value.
    Str(String),
    /// An ordered list of values.
    Vector(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl Value {
    /// Returns the name of the value's type as shown in diagnostics.
    ///
    /// # Example
    /// ```
    /// use hulk::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "number");
    /// assert_eq!(Value::from("hi").type_name(), "string");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Vector(_) => "vector",
        }
    }

    /// Returns the number inside, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean inside, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string inside, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a vector value, if any.
    #[must_use]
    pub fn as_vector(&self) -> Option<&Rc<Vec<Self>>> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    /// Formats the value the way `print`, `@` and loops show it.
    ///
    /// Integral numbers have no fractional part (`13`, not `13.0`) and
    /// vectors are written as `[a, b, c]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Vector(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
        }
    }
}
