//! # aurora
//!
//! aurora is an interpreter for a small, dynamically typed scripting language
//! written in Rust. Source text is scanned into tokens, parsed into an abstract
//! syntax tree by recursive descent, and evaluated by a tree-walking evaluator
//! over chained scopes.
//!
//! The language has numbers, strings, lists, conditionals, `while` and
//! `repeat` loops, functions, single-level classes with methods and fields,
//! and the built-ins `push`, `pop` and `len`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    config::Config,
    error::ParseError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        lexer::Token,
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Settings for a program run.
///
/// Selects how function calls parent their scope and how deeply calls may
/// nest.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// Scans source text into `(token, line)` pairs.
///
/// Never fails: characters that cannot start a token are dropped. The result
/// always ends with [`Token::Eof`].
///
/// # Example
/// ```
/// use aurora::{interpreter::lexer::Token, scan};
///
/// let tokens = scan("say 1");
///
/// assert_eq!(tokens.last(), Some(&(Token::Eof, 1)));
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<(Token, usize)> {
    interpreter::lexer::scan(source)
}

/// Parses a token sequence into the statements of a program.
///
/// # Errors
/// Returns the first syntax error in the input.
///
/// # Example
/// ```
/// use aurora::{parse, scan};
///
/// assert!(parse(&scan("let x = (1 + 2")).is_err());
/// assert_eq!(parse(&scan("let x = 1\nsay x")).unwrap().len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> Result<Vec<Statement>, ParseError> {
    parse_program(tokens)
}

/// Runs a parsed program with the default [`Config`].
///
/// Every `say` statement sends one line to `output`. See [`run_with_config`].
///
/// # Errors
/// Returns a runtime error if the program applies an operator to incompatible
/// operands, repeats a non-numeric count, or nests calls too deeply.
pub fn run(statements: &[Statement], output: &mut dyn FnMut(&str)) -> EvalResult<Value> {
    run_with_config(statements, Config::default(), output)
}

/// Runs a parsed program in a fresh top-level environment.
///
/// Statements run in order until the last one, or until a top-level `return`.
///
/// # Returns
/// The value of the last statement executed, or the value of a top-level
/// `return`. An empty program yields [`Value::Absent`].
///
/// # Errors
/// Returns the first runtime error raised by the program.
///
/// # Example
/// ```
/// use aurora::{config::Config, interpreter::value::core::Value, parse, run_with_config, scan};
///
/// let program = parse(&scan("let x = 5\nsay x + 2\nx * 2")).unwrap();
/// let mut lines = Vec::new();
///
/// let result = run_with_config(&program, Config::default(), &mut |line: &str| {
///                  lines.push(line.to_string())
///              });
///
/// assert_eq!(result.unwrap(), Value::Number(10.0));
/// assert_eq!(lines, ["7"]);
/// ```
pub fn run_with_config(statements: &[Statement],
                       config: Config,
                       output: &mut dyn FnMut(&str))
                       -> EvalResult<Value> {
    let globals = Environment::new();
    let mut context = Context::new(config, output);

    log::debug!("running {} statements with {config:?}", statements.len());
    let flow = context.eval_block(statements, &globals)?;

    Ok(flow.into_value())
}

/// Scans, parses and runs `source`.
///
/// # Errors
/// Returns the syntax error or runtime error that stopped the program.
/// Output produced before a runtime error has already been sent to `output`.
pub fn execute(source: &str,
               config: Config,
               output: &mut dyn FnMut(&str))
               -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = scan(source);
    let statements = parse(&tokens)?;

    Ok(run_with_config(&statements, config, output)?)
}

/// Runs `source` with the default configuration and collects its output.
///
/// This function scans, parses and executes all statements in the provided
/// source string. If execution succeeds, it returns the emitted lines in
/// order; otherwise, it returns an error with details about the failure.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use aurora::get_output;
///
/// let lines = get_output("let x = 5\nsay x + 2").unwrap();
/// assert_eq!(lines, ["7"]);
///
/// // Unknown names are not an error.
/// let lines = get_output("say unknownVar").unwrap();
/// assert_eq!(lines, ["null"]);
///
/// // Syntax errors are.
/// assert!(get_output("say (1 + 2").is_err());
/// ```
pub fn get_output(source: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut lines = Vec::new();
    execute(source, Config::default(), &mut |line: &str| lines.push(line.to_string()))?;
    Ok(lines)
}
