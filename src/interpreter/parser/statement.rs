use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{ClassDef, Expr, FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::{expect_end, parse_statements, skip_header_separator},
            core::{ParseResult, parse_expression},
            utils::{
                expect_token, parse_comma_separated, parse_identifier, peek_entry, skip_newlines,
            },
        },
    },
};

/// Parses a single statement.
///
/// The leading token selects the form:
/// - `say`, `let` and `return` statements,
/// - `if`, `while` and `repeat` blocks,
/// - `define` function definitions and `class` definitions.
///
/// Anything else is parsed as an expression statement, such as a bare call or
/// an assignment. A token that cannot start an expression produces
/// [`ParseError::UnexpectedToken`](crate::error::ParseError::UnexpectedToken).
///
/// The statement's source line is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = peek_entry(tokens);
    let line = *line;

    match token {
        Token::Say => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            Ok(Statement::Say { expr, line })
        },
        Token::Let => {
            tokens.next();
            parse_let(tokens, line)
        },
        Token::Return => {
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Statement::Return { value, line })
        },
        Token::If => {
            tokens.next();
            parse_if(tokens, line)
        },
        Token::While => {
            tokens.next();
            parse_while(tokens, line)
        },
        Token::Repeat => {
            tokens.next();
            parse_repeat(tokens, line)
        },
        Token::Define => Ok(Statement::Function(Rc::new(parse_function_definition(tokens)?))),
        Token::Class => {
            tokens.next();
            parse_class_definition(tokens, line)
        },
        _ => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses the remainder of a `let` statement.
///
/// `let <identifier> = <expression>` is an assignment to the variable and
/// follows the same write rule as a bare `x = ...`. Any other form is parsed
/// as an ordinary expression, which allows attribute writes such as
/// `let self.count = 0`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `let`.
/// - `line`: Line number of the `let` token.
fn parse_let<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if let Some((Token::Identifier(name), _)) = lookahead.next()
       && let Some((Token::Equals, _)) = lookahead.peek()
    {
        tokens.next();
        tokens.next();

        let value = parse_expression(tokens)?;
        let expr = Expr::Assign { name: name.clone(),
                                  value: Box::new(value),
                                  line };
        return Ok(Statement::Expression { expr, line });
    }

    let expr = parse_expression(tokens)?;
    Ok(Statement::Expression { expr, line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition> [:] [NEWLINE]
///         <statements>
///     else [:] [NEWLINE]
///         <statements>
///     end
/// ```
/// A single `end` closes the whole statement, including the `else` branch.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    skip_header_separator(tokens);
    let then_branch = parse_statements(tokens)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        skip_header_separator(tokens);
        Some(parse_statements(tokens)?)
    } else {
        None
    };

    expect_end(tokens, "if", line)?;

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses `while <condition> [:] ... end`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    skip_header_separator(tokens);
    let body = parse_statements(tokens)?;
    expect_end(tokens, "while", line)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses `repeat <count> times [:] ... end`.
///
/// # Errors
/// Returns a `ParseError` if `times` does not follow the count expression.
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let count = parse_expression(tokens)?;
    expect_token(tokens, &Token::Times, "'times'")?;
    skip_header_separator(tokens);
    let body = parse_statements(tokens)?;
    expect_end(tokens, "repeat", line)?;

    Ok(Statement::Repeat { count, body, line })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     define <name>(<param>, ...) [:] [NEWLINE]
///         <statements>
///     end
/// ```
/// Used both for free functions and for methods inside a class body.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `define` keyword.
///
/// # Errors
/// Returns a `ParseError` if the name or the parameter list is malformed, or
/// if the body is not closed by `end`.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Define, "'define'")?;
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    skip_header_separator(tokens);
    let body = parse_statements(tokens)?;
    expect_end(tokens, "define", line)?;

    log::trace!("parsed function '{name}' with {} parameters", params.len());
    Ok(FunctionDef { name,
                     params,
                     body,
                     line })
}

/// Parses a class definition.
///
/// Syntax:
/// ```text
///     class <name> [:] [NEWLINE]
///         define <method>(...) ... end
///         ...
///     end
/// ```
/// Only `define` blocks are meaningful inside a class body. Any other token is
/// skipped.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `class` keyword.
/// - `line`: Line number of the `class` token.
fn parse_class_definition<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    skip_header_separator(tokens);

    let mut methods = Vec::new();
    loop {
        skip_newlines(tokens);
        match peek_entry(tokens) {
            (Token::Define, _) => methods.push(Rc::new(parse_function_definition(tokens)?)),
            (Token::End | Token::Eof, _) => break,
            (tok, tok_line) => {
                log::debug!("skipping '{tok}' on line {tok_line} inside class '{name}'");
                tokens.next();
            },
        }
    }
    expect_end(tokens, "class", line)?;

    Ok(Statement::Class(ClassDef { name,
                                   methods,
                                   line }))
}
