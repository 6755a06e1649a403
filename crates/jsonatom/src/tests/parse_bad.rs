use rstest::rstest;
use std::string::ToString;

use crate::{parse, ParseError};

#[rstest]
#[case("")]
#[case(" ")]
#[case(" \t\n\r ")]
fn empty_or_whitespace_input(#[case] input: &str) {
    assert_eq!(parse(input), Err(ParseError::ExpectValue));
}

#[rstest]
#[case("tru")]
#[case("fals")]
#[case("nul")]
#[case("t")]
#[case("n")]
#[case("trie")]
#[case("nulx")]
#[case("TRUE")]
fn broken_literals(#[case] input: &str) {
    assert_eq!(parse(input), Err(ParseError::InvalidValue));
}

#[rstest]
#[case("+0")]
#[case("+1")]
#[case("-")]
#[case(".")]
#[case(".123")]
#[case("1.")]
#[case("1e")]
#[case("1e+")]
#[case("1E-")]
#[case("INF")]
#[case("inf")]
#[case("NAN")]
#[case("nan")]
#[case("[1]")]
#[case("\"x\"")]
#[case("é")]
fn invalid_numbers(#[case] input: &str) {
    assert_eq!(parse(input), Err(ParseError::InvalidValue));
}

// A leading zero ends the integer part, so the rest of the input survives as
// trailing content rather than failing inside the number grammar.
#[rstest]
#[case("0123")]
#[case("0x0")]
#[case("0x123")]
#[case("truee")]
#[case("true false")]
#[case("null x")]
#[case("1.5 2")]
#[case("0 ,")]
fn trailing_content(#[case] input: &str) {
    assert_eq!(parse(input), Err(ParseError::RootNotSingular));
}

#[test]
fn error_messages() {
    assert_eq!(ParseError::ExpectValue.to_string(), "expected a value");
    assert_eq!(ParseError::InvalidValue.to_string(), "invalid value");
    assert_eq!(
        ParseError::RootNotSingular.to_string(),
        "root not singular"
    );
}
