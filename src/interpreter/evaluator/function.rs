/// Call dispatch and the function invocation protocol.
///
/// Decides what a call does based on the callee value, binds parameters in a
/// fresh scope, and unwraps early returns.
pub mod core;

/// Built-in list operations: `push`, `pop` and `len`.
pub mod builtin;
