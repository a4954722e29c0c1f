use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `23.`.
    ///
    /// A literal begins with a decimal digit and contains at most one decimal
    /// point, consumed with maximal munch. A leading `.` does not start a
    /// literal, so `.5` is rejected as an invalid character.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_literal)]
    Literal(f64),
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\n\r\f\x0B]+", logos::skip)]
    Ignored,
}

/// Scans one input line into a sequence of tokens with their byte offsets.
///
/// Whitespace is skipped; every other byte must begin a token. Scanning stops
/// at the first invalid character, so the returned sequence is either complete
/// or absent. An empty or all-whitespace line yields an empty sequence.
///
/// # Parameters
/// - `source`: The input line to tokenize.
///
/// # Returns
/// The tokens in source order, each paired with the byte offset of its first
/// character.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] at the offset of the first byte
/// that cannot start any token.
pub fn scan(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::InvalidCharacter { offset: lexer.span().start });
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_literal(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
