/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and reduces it to a single floating-point
/// value. It is the final stage of the pipeline and, by construction, cannot
/// fail on any tree the parser produces.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the four arithmetic operations.
/// - Preserves IEEE 754 semantics, including division by zero.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful element such as a numeric
/// literal, an operator, or a parenthesis. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offsets.
/// - Handles numeric literals with maximal munch and a single decimal point.
/// - Reports a lexical error at the first invalid character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST representing the syntactic structure of the expression, honoring
/// operator precedence and left-associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes via recursive descent.
/// - Validates the grammar, reporting errors with byte offsets.
/// - Requires the whole token stream to be consumed by one expression.
pub mod parser;
