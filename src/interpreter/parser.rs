/// Parser entry points and expression-level logic.
///
/// Contains the program entry point, the assignment rule and the shared
/// `ParseResult` alias.
pub mod core;

/// Call chains and atoms.
///
/// Parses literals, names, list literals, parenthesized groups and the
/// left-to-right chain of calls and attribute accesses that may follow them.
pub mod primary;

/// Binary operator parsing.
///
/// Implements the two precedence levels of the language: `*` and `/`, and a
/// single flattened level for `+ - > < ==`.
pub mod binary;

/// Statement sequences and block bodies.
///
/// Collects statements until `end`, `else` or the end of input, and consumes
/// the optional header separators and the closing `end`.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists, identifiers and expected tokens.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token to `say`, `let`, `return`, block statements,
/// function and class definitions, or an expression statement.
pub mod statement;
