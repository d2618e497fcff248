use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_binary, block::parse_statements, utils::peek_entry},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a program.
///
/// The program is the statement sequence starting at the first token. Like
/// every statement sequence it stops at `end`, `else` or the end of input; a
/// stray top-level `end` or `else` therefore ends the program, and everything
/// after it is ignored.
///
/// # Parameters
/// - `tokens`: The `(token, line)` pairs produced by the scanner.
///
/// # Returns
/// The parsed statements in source order.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no partial program is
/// returned.
///
/// # Example
/// ```
/// use aurora::{
///     ast::Statement,
///     interpreter::{lexer::scan, parser::core::parse_program},
/// };
///
/// let program = parse_program(&scan("let x = 5\nsay x + 2")).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Statement::Say { line: 2, .. }));
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let statements = parse_statements(&mut iter)?;

    let (token, line) = peek_entry(&mut iter);
    if *token != Token::Eof {
        log::warn!("stray '{token}' on line {line}, ignoring the rest of the program");
    }

    log::debug!("parsed {} top-level statements", statements.len());
    Ok(statements)
}

/// Parses a full expression, including assignment.
///
/// The left-hand side is parsed at the lowest binary precedence level. If it
/// is followed by `=`, the right-hand side is parsed by recursing into this
/// function, which makes chained assignment right-associative and binds it
/// looser than every operator.
///
/// Grammar: `expression := binary ("=" expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] if the left-hand side of
/// `=` is neither a variable nor an attribute read.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_binary(tokens)?;

    let Some((Token::Equals, line)) = tokens.peek() else {
        return Ok(left);
    };
    let line = *line;
    tokens.next();

    let value = Box::new(parse_expression(tokens)?);
    match left {
        Expr::Variable { name, .. } => Ok(Expr::Assign { name, value, line }),
        Expr::GetAttr { target, name, .. } => Ok(Expr::SetAttr { target,
                                                                 name,
                                                                 value,
                                                                 line }),
        _ => Err(ParseError::InvalidAssignmentTarget { line }),
    }
}
