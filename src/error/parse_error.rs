#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during parsing.
///
/// Scanning never fails, so every syntax problem surfaces here. Parsing stops
/// at the first error.
pub enum ParseError {
    /// Found a token that cannot start a statement or expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input inside an unterminated construct.
    UnexpectedEndOfInput {
        /// The construct that was left open (e.g. `if`).
        construct: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of `=` is neither a variable nor an attribute.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but another one was found.
    Expected {
        /// What the parser was looking for.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::ExpectedClosingParen { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::Expected { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Syntax Error: Unexpected token '{token}' at line {line}")
            },
            Self::UnexpectedEndOfInput { construct, line } => write!(f,
                                                                     "Syntax Error: Unexpected end of input, '{construct}' block is missing 'end' at line {line}"),
            Self::ExpectedClosingParen { line } => {
                write!(f, "Syntax Error: Expected ')' at line {line}")
            },
            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Syntax Error: Invalid assignment target at line {line}")
            },
            Self::Expected { expected,
                             found,
                             line, } => {
                write!(f, "Syntax Error: Expected {expected}, found '{found}' at line {line}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
