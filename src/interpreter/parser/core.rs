use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_term},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// [`ParseError`] describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into an expression tree.
///
/// This is the entry point for parsing. It begins at the lowest-precedence
/// level, the term, and recursively descends through the precedence
/// hierarchy. After the term is parsed the stream must be exhausted; a
/// leftover token (such as a stray `)` or a second expression with no
/// operator between) is reported at that token's offset.
///
/// Grammar: `expression := term`
///
/// # Parameters
/// - `tokens`: Tokens with byte offsets, as produced by
///   [`scan`](crate::interpreter::lexer::scan).
/// - `end`: Byte length of the source line, reported as the offset when the
///   stream ends where a token was required.
///
/// # Returns
/// The root of the parsed expression tree. On failure, every partially built
/// subtree is dropped before the error propagates.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] for a token that does not fit the
///   grammar or for leftover tokens after a complete expression.
/// - [`ParseError::UnexpectedEndOfInput`] when the stream is exhausted where
///   an expression was required, including the empty stream.
pub fn parse(tokens: &[(Token, usize)], end: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    let expr = parse_term(&mut iter, end)?;

    if let Some((_, offset)) = iter.peek() {
        return Err(ParseError::UnexpectedToken { offset: *offset });
    }

    Ok(expr)
}
