use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier, peek_entry},
        },
    },
};

/// Parses an atom followed by any chain of calls and attribute accesses.
///
/// The chain is applied left to right, so `a.b(1).c` reads attribute `b` of
/// `a`, calls it, and reads `c` from the result. Indexing with `[` is not part
/// of the language; a `[` after an atom simply ends the chain.
///
/// Grammar:
/// ```text
///     call := atom ( "(" (expression ("," expression)*)? ")" | "." IDENT )*
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
///
/// # Returns
/// The atom with all postfix calls and attribute reads folded in.
///
/// # Errors
/// Returns a `ParseError` if the atom is invalid, an argument list is not
/// closed, or `.` is not followed by an identifier.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_atom(tokens)?;
    loop {
        match peek_entry(tokens) {
            (Token::LParen, line) => {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line: *line };
            },
            (Token::Dot, line) => {
                tokens.next();
                let name = parse_identifier(tokens)?;
                node = Expr::GetAttr { target: Box::new(node),
                                       name,
                                       line: *line };
            },
            _ => break,
        }
    }
    Ok(node)
}

/// Parses an atom.
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | STRING
///           | IDENT
///           | "[" (expression ("," expression)*)? "]"
///           | "(" expression ")"
/// ```
/// # Errors
/// - `UnexpectedToken` if the token cannot start an expression.
/// - `ExpectedClosingParen` if a parenthesized expression is not closed.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = peek_entry(tokens);
    let line = *line;

    match token {
        Token::Number(n) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Number(*n),
                               line })
        },
        Token::Str(s) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                               line })
        },
        Token::Identifier(name) => {
            tokens.next();
            Ok(Expr::Variable { name: name.clone(),
                                line })
        },
        Token::LBracket => {
            tokens.next();
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::ListLiteral { elements, line })
        },
        Token::LParen => parse_grouping(tokens),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line }),
    }
}

/// Parses a parenthesized expression and returns the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens)?;

    match peek_entry(tokens) {
        (Token::RParen, _) => {
            tokens.next();
            Ok(expr)
        },
        (_, line) => Err(ParseError::ExpectedClosingParen { line: *line }),
    }
}
