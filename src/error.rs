/// Parsing errors.
///
/// Defines all error types that can occur during scanning and parsing of an
/// input line. Parse errors include invalid characters, unexpected tokens,
/// and premature end of input, each carrying the byte offset where the
/// problem was found.
pub mod parse_error;

pub use parse_error::ParseError;
