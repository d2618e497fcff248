use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Stand-in entry returned once the iterator is exhausted.
static END_OF_INPUT: (Token, usize) = (Token::Eof, 0);

/// Returns the next `(token, line)` entry without consuming it.
///
/// Scanned sequences always end with [`Token::Eof`]; an exhausted iterator is
/// reported the same way.
pub(in crate::interpreter::parser) fn peek_entry<'a, I>(tokens: &mut Peekable<I>)
                                                        -> &'a (Token, usize)
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().copied().unwrap_or(&END_OF_INPUT)
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, argument lists and parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, or if anything other than
/// a comma or the closing token follows an item. A missing `)` is reported as
/// [`ParseError::ExpectedClosingParen`].
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);

        let (tok, line) = peek_entry(tokens);
        match tok {
            Token::Comma => {
                tokens.next();
            },
            tok if tok == closing => {
                tokens.next();
                break;
            },
            _ if *closing == Token::RParen => {
                return Err(ParseError::ExpectedClosingParen { line: *line });
            },
            tok => {
                return Err(ParseError::Expected { expected: format!("',' or '{closing}'"),
                                                  found:    tok.to_string(),
                                                  line:     *line, });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are separate tokens,
/// so they are rejected here without any extra check.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns [`ParseError::Expected`] if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match peek_entry(tokens) {
        (Token::Identifier(name), _) => {
            tokens.next();
            Ok(name.clone())
        },
        (tok, line) => Err(ParseError::Expected { expected: "identifier".to_string(),
                                                  found:    tok.to_string(),
                                                  line:     *line, }),
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Errors
/// Returns [`ParseError::Expected`], naming `description`, when the next token
/// is anything else.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (tok, line) = peek_entry(tokens);
    if tok == expected {
        tokens.next();
        return Ok(*line);
    }

    Err(ParseError::Expected { expected: description.to_string(),
                               found:    tok.to_string(),
                               line:     *line, })
}

/// Skips any number of newline tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}
