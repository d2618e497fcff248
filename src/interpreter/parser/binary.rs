use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_call},
    },
};

/// Parses the flattened additive and comparison level.
///
/// Arithmetic `+`/`-` and the comparisons `>`, `<` and `==` share a single
/// precedence level. They are left-associative and applied strictly left to
/// right, so `1 + 2 > 2 + 1` groups as `((1 + 2) > 2) + 1`.
///
/// The rule is: `binary := term (("+" | "-" | ">" | "<" | "==") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && !is_multiplicative(op)
    {
        let line = *line;
        tokens.next();
        let right = parse_term(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `term := call (("*" | "/") call)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining call-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_call(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && is_multiplicative(op)
    {
        let line = *line;
        tokens.next();
        let right = parse_call(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not a binary operator. Note that `=`
/// is assignment, not an operator.
///
/// # Example
/// ```
/// use aurora::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::EqualEqual),
///            Some(BinaryOperator::Equal));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Less => Some(BinaryOperator::Less),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        _ => None,
    }
}

const fn is_multiplicative(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
}
