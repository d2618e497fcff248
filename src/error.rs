/// Parsing errors.
///
/// Defines the syntax errors that can occur while turning tokens into
/// statements: unexpected tokens, unclosed parentheses, unterminated blocks and
/// invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the few error types that can abort evaluation, such as operators
/// applied to incompatible operands.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
