#[derive(Debug, Clone, PartialEq)]
/// Represents the errors that can occur during evaluation.
///
/// Most invalid operations do not fail: unknown names, unknown attributes,
/// attribute writes on non-instances and malformed built-in calls all evaluate
/// to `Absent`. Only the cases below abort a run.
pub enum RuntimeError {
    /// An operator was applied to operands it is not defined for.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// What the number was needed for.
        context: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Function calls nested deeper than the configured limit.
    CallDepthExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TypeError { line, .. }
            | Self::ExpectedNumber { line, .. }
            | Self::CallDepthExceeded { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details, line } => {
                write!(f, "Runtime Error on line {line}: Type error: {details}.")
            },
            Self::ExpectedNumber { context, line } => {
                write!(f, "Runtime Error on line {line}: Expected number for {context}.")
            },
            Self::CallDepthExceeded { limit, line } => write!(f,
                                                              "Runtime Error on line {line}: Maximum call depth of {limit} exceeded."),
        }
    }
}

impl std::error::Error for RuntimeError {}
