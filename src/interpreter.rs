/// The environment module implements chained variable scopes.
///
/// Each scope owns its bindings and refers to its parent. Lookups walk the
/// chain outwards; writes use either `define` (always local) or `assign`
/// (mutate the nearest outer binding, else define locally).
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages scopes, dispatches calls and produces output lines. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Propagates `return` through blocks and loops as an explicit result.
/// - Reports the few runtime errors the language has, such as operators
///   applied to incompatible operands.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, keywords and operators. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Skips whitespace and comments, and silently drops unknown characters.
/// - Terminates every token sequence with a single end-of-input token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of a program by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting the first syntax error with its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the values a program can produce: numbers,
/// strings, booleans, shared lists, classes, instances, functions, bound
/// methods and the `Absent` marker. It also defines their display form,
/// truthiness and equality.
pub mod value;
