/// Operator dispatch.
///
/// Also evaluates `==`, which compares any two values and never fails.
pub mod core;

/// Ordering comparisons.
///
/// `<` and `>` compare two numbers or two strings.
pub mod comparison;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;
