use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_term, core::ParseResult},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := LITERAL
///              | "(" term ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `end`: Byte length of the source line, for end-of-input errors.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if no token remains where a
///   primary expression was required.
/// - [`ParseError::UnexpectedToken`] if the next token cannot begin a
///   primary expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, offset) = match tokens.peek() {
        Some(&&(token, offset)) => (token, offset),
        None => return Err(ParseError::UnexpectedEndOfInput { offset: end }),
    };

    match token {
        Token::Literal(value) => {
            tokens.next();
            Ok(Expr::Literal { value })
        },
        Token::LeftParen => parse_grouping(tokens, end),
        _ => Err(ParseError::UnexpectedToken { offset }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( term )`
///
/// The function consumes the opening parenthesis, parses the enclosed term,
/// and then requires a closing `)`. A token other than `)` in that position
/// is reported at its own offset; a stream that ends before the `)` is
/// reported at the end of the source line.
///
/// Grammar: `grouping := "(" term ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `end`: Byte length of the source line.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next(); // consume '('
    let expr = parse_term(tokens, end)?;
    match tokens.next() {
        Some((Token::RightParen, _)) => Ok(expr),
        Some((_, offset)) => Err(ParseError::UnexpectedToken { offset: *offset }),
        None => Err(ParseError::UnexpectedToken { offset: end }),
    }
}
