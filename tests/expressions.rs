use minicalc::{
    error::ParseError,
    evaluate_line,
    interpreter::lexer::{Token, scan},
};

fn assert_value(src: &str, expected: f64) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to {value}"),
        Err(e) => panic!("'{src}' failed to evaluate: {e}"),
    }
}

fn assert_error(src: &str, expected: &ParseError) {
    match evaluate_line(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

#[test]
fn literals() {
    assert_value("42", 42.0);
    assert_value("3.5", 3.5);
    assert_value("0", 0.0);
    assert_value("23.", 23.0);
    assert_value("  7  ", 7.0);
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("16 / 4 / 2", 2.0);
    assert_value("1 + 2 + 3 + 4", 10.0);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("((1 + 2) * (3 + 4))", 21.0);
    assert_value("(5)", 5.0);
}

#[test]
fn division_by_zero_follows_ieee_754() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("(0 - 1) / 0", f64::NEG_INFINITY);
    assert!(evaluate_line("0 / 0").unwrap().is_nan());
}

#[test]
fn invalid_characters() {
    assert_error("3a", &ParseError::InvalidCharacter { offset: 1 });
    assert_error("2 + x", &ParseError::InvalidCharacter { offset: 4 });
    assert_error(".234", &ParseError::InvalidCharacter { offset: 0 });
}

#[test]
fn second_decimal_point_ends_the_literal() {
    // "23.23" is scanned with maximal munch; the second '.' cannot start a
    // token and is reported at its own offset.
    assert_error("23.23.3", &ParseError::InvalidCharacter { offset: 5 });
}

#[test]
fn unbalanced_parentheses() {
    assert_error("(2+1))", &ParseError::UnexpectedToken { offset: 5 });
    assert_error("(", &ParseError::UnexpectedEndOfInput { offset: 1 });
    assert_error("()", &ParseError::UnexpectedToken { offset: 1 });
    assert_error("())", &ParseError::UnexpectedToken { offset: 1 });
    assert_error("(1", &ParseError::UnexpectedToken { offset: 2 });
}

#[test]
fn leftover_and_misplaced_tokens() {
    assert_error("23 23", &ParseError::UnexpectedToken { offset: 3 });
    assert_error("3++3", &ParseError::UnexpectedToken { offset: 2 });
    assert_error("1 +", &ParseError::UnexpectedEndOfInput { offset: 3 });
    assert_error("* 2", &ParseError::UnexpectedToken { offset: 0 });
}

#[test]
fn empty_input() {
    assert_error("", &ParseError::UnexpectedEndOfInput { offset: 0 });
    assert_error("   ", &ParseError::UnexpectedEndOfInput { offset: 3 });
}

#[test]
fn scanner_records_byte_offsets() {
    let tokens = scan("1 + (2 * 34)").unwrap();

    assert_eq!(tokens,
               vec![(Token::Literal(1.0), 0),
                    (Token::Add, 2),
                    (Token::LeftParen, 4),
                    (Token::Literal(2.0), 5),
                    (Token::Mul, 7),
                    (Token::Literal(34.0), 9),
                    (Token::RightParen, 11)]);
}

#[test]
fn scanner_skips_all_whitespace_classes() {
    assert_value("1\t+\u{b}2\r", 3.0);
    assert_eq!(scan(" \t \n ").unwrap(), vec![]);
}

#[test]
fn diagnostics_render_with_an_aligned_caret() {
    let source = "3a";
    let error = evaluate_line(source).unwrap_err();
    assert_eq!(error.render(source),
               "Error at offset 1: Invalid character.\n    3a\n     ^---- Here");

    // The caret for a missing token lands one column past the last character.
    let source = "1 +";
    let error = evaluate_line(source).unwrap_err();
    assert_eq!(error.render(source),
               "Error at offset 3: Unexpected end of input.\n    1 +\n       ^---- Here");
}
