use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{peek_entry, skip_newlines},
        },
    },
};

/// Parses a sequence of statements.
///
/// Newlines between statements are skipped. The sequence stops, without
/// consuming anything, at the first `end`, `else` or end of input; the
/// enclosing construct decides what to do with that token.
///
/// Grammar: `statements := statement* ("end" | "else" | EOF)`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
///
/// # Returns
/// The statements in source order.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);

        if matches!(peek_entry(tokens), (Token::End | Token::Else | Token::Eof, _)) {
            break;
        }

        let statement = parse_statement(tokens)?;
        log::trace!("parsed statement on line {}", statement.line_number());
        statements.push(statement);
    }

    Ok(statements)
}

/// Consumes the optional `:` and the optional newline after a block header.
pub fn skip_header_separator<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Colon, _)) = tokens.peek() {
        tokens.next();
    }
    if let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Consumes the `end` that closes a block.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the block body.
/// - `construct`: The keyword that opened the block, used in diagnostics.
/// - `line`: Line of the opening keyword.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends before `end`.
/// - `Expected` if another token (such as a misplaced `else`) is found.
pub fn expect_end<'a, I>(tokens: &mut Peekable<I>, construct: &str, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match peek_entry(tokens) {
        (Token::End, _) => {
            tokens.next();
            Ok(())
        },
        (Token::Eof, _) => Err(ParseError::UnexpectedEndOfInput { construct: construct.to_string(),
                                                                  line }),
        (tok, found_line) => Err(ParseError::Expected { expected: "'end'".to_string(),
                                                        found:    tok.to_string(),
                                                        line:     *found_line, }),
    }
}
