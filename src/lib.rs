//! # minicalc
//!
//! minicalc is an interactive arithmetic expression evaluator written in
//! Rust. It reads one line of text containing numeric literals, the four
//! arithmetic operators, and parenthesized grouping, and produces either a
//! floating-point result or a position-annotated diagnostic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{evaluator::evaluate, lexer::scan, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an arithmetic expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal and binary-operation expression variants.
/// - Owns subtree nodes exclusively, so a tree is dropped as one unit.
pub mod ast;
/// Provides unified error types for scanning and parsing.
///
/// This module defines all errors that can be raised while turning an input
/// line into an expression tree. Every error carries the byte offset of the
/// offending position so the caller can render a caret diagnostic against
/// the original line.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes (lexer and parser).
/// - Attaches byte offsets and human-readable messages.
/// - Renders the three-line caret diagnostic shown at the prompt.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide the
/// complete pipeline from one line of text to one numeric result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the evaluation result for one line of input.
///
/// This function runs the full pipeline: the line is scanned into tokens,
/// parsed into an expression tree, and the tree is evaluated to a single
/// floating-point value. The first error in any phase aborts the pipeline
/// and is returned with the byte offset where it occurred.
///
/// # Errors
/// Returns a [`ParseError`] if scanning or parsing fails. Evaluation itself
/// cannot fail; division by zero produces an IEEE 754 infinity or NaN.
///
/// # Examples
/// ```
/// use minicalc::evaluate_line;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), 14.0);
///
/// // Same-precedence operators fold left-to-right.
/// assert_eq!(evaluate_line("8 - 3 - 2").unwrap(), 3.0);
///
/// // A letter cannot start a token.
/// let error = evaluate_line("3a").unwrap_err();
/// assert_eq!(error.offset(), 1);
/// ```
pub fn evaluate_line(source: &str) -> Result<f64, ParseError> {
    let tokens = scan(source)?;
    let expr = parse(&tokens, source.len())?;

    Ok(evaluate(&expr))
}
