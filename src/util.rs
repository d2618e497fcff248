/// Numeric helpers.
///
/// This module provides the lossless `usize` to `f64` conversion used by the
/// `len` built-in, and the number formatting used when values are printed.
pub mod num;
