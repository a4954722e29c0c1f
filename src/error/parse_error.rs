#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
///
/// Every variant carries the byte offset into the original input line where
/// the error was detected, so callers can point at the offending character
/// when rendering a diagnostic. The first error encountered aborts the
/// pipeline; there is no recovery or multi-error collection.
pub enum ParseError {
    /// The scanner encountered a byte that cannot start any token.
    InvalidCharacter {
        /// Byte offset of the invalid character.
        offset: usize,
    },
    /// The parser found a token inconsistent with the grammar position, or
    /// tokens were left over after a complete expression.
    UnexpectedToken {
        /// Byte offset of the offending token.
        offset: usize,
    },
    /// The parser required a token but the stream was exhausted.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the source line.
        offset: usize,
    },
}

impl ParseError {
    /// Gets the byte offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use minicalc::error::ParseError;
    ///
    /// let error = ParseError::InvalidCharacter { offset: 3 };
    ///
    /// assert_eq!(error.offset(), 3);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset }
            | Self::UnexpectedToken { offset }
            | Self::UnexpectedEndOfInput { offset } => *offset,
        }
    }

    /// Renders the diagnostic against the source line it was produced from.
    ///
    /// The output has three lines: the error message, the echoed source line
    /// at a fixed four-space indent, and a caret aligned under the byte at
    /// [`offset`](Self::offset). For [`ParseError::UnexpectedEndOfInput`] the
    /// caret lands one column past the last character.
    ///
    /// # Parameters
    /// - `source`: The input line this error was produced from.
    ///
    /// # Example
    /// ```
    /// use minicalc::evaluate_line;
    ///
    /// let error = evaluate_line("3a").unwrap_err();
    ///
    /// assert_eq!(error.render("3a"),
    ///            "Error at offset 1: Invalid character.\n    3a\n     ^---- Here");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let indent = " ".repeat(self.offset() + 4);
        format!("{self}\n    {source}\n{indent}^---- Here")
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { offset } => {
                write!(f, "Error at offset {offset}: Invalid character.")
            },

            Self::UnexpectedToken { offset } => {
                write!(f, "Error at offset {offset}: Unexpected token.")
            },

            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
