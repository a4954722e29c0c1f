/// Binary expression parsing.
///
/// Implements the two left-associative precedence levels of the grammar,
/// terms (`+`, `-`) and factors (`*`, `/`), and the mapping from tokens to
/// binary operators.
pub mod binary;

/// Core parsing logic.
///
/// Contains the parse entry point, the shared result type, and the check
/// that the whole token stream was consumed.
pub mod core;

/// Primary expression parsing.
///
/// Handles the atoms of the grammar: numeric literals and parenthesized
/// groupings.
pub mod primary;

pub use self::core::parse;
