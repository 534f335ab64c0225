/// Default ceiling for nested parse routines.
pub const DEFAULT_MAX_PARSE_DEPTH: usize = 1000;
/// Default ceiling for nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;
/// Default ceiling for the number of elements a `range` may produce.
pub const DEFAULT_MAX_RANGE_LEN: usize = 1_000_000;

/// Resource limits applied to one interpreter session.
///
/// Every limit fails closed: hitting it produces a diagnostic instead of
/// exhausting the stack or memory.
///
/// # Example
/// ```
/// use hulk::config::Limits;
///
/// let limits = Limits::default().with_max_call_depth(50);
/// assert_eq!(limits.max_call_depth, 50);
/// assert_eq!(limits.max_parse_depth, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting of parse routines before a syntax error is reported.
    pub max_parse_depth: usize,
    /// Maximum nesting of function calls before a stack overflow is reported.
    pub max_call_depth:  usize,
    /// Maximum number of elements produced by a single `range`.
    pub max_range_len:   usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_parse_depth: DEFAULT_MAX_PARSE_DEPTH,
               max_call_depth:  DEFAULT_MAX_CALL_DEPTH,
               max_range_len:   DEFAULT_MAX_RANGE_LEN, }
    }
}

impl Limits {
    /// Returns a copy with a different parse-depth ceiling.
    #[must_use]
    pub const fn with_max_parse_depth(mut self, depth: usize) -> Self {
        self.max_parse_depth = depth;
        self
    }

    /// Returns a copy with a different call-depth ceiling.
    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Returns a copy with a different maximum range length.
    #[must_use]
    pub const fn with_max_range_len(mut self, len: usize) -> Self {
        self.max_range_len = len;
        self
    }
}
