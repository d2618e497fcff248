/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, ordering and equality.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the expression dispatcher and the
/// control-flow result threaded through statement evaluation.
pub mod core;

/// Statement and block evaluation.
///
/// Executes `say`, conditionals, both loop forms, definitions and `return`,
/// propagating early returns without unwinding.
pub mod statement;

/// Objects: instantiation and attribute access.
pub mod object;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the evaluation routines, such as evaluating
/// argument lists and list literals.
pub mod utils;

/// Function evaluation.
///
/// Handles calls to user-defined functions, bound methods and classes, and
/// the fallback to the built-in list operations.
pub mod function;
