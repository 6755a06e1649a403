//! Cursor-based scanner for a single JSON scalar value.

use crate::{error::ParseError, value::Value};

/// Parses `text` as exactly one JSON scalar value.
///
/// Leading and trailing whitespace (space, tab, newline, carriage return) is
/// ignored; any other content before or after the value is an error. The
/// parse is a pure function of its input: no state is shared between calls.
///
/// # Errors
///
/// - [`ParseError::ExpectValue`] if the input is empty or all whitespace.
/// - [`ParseError::InvalidValue`] if the input does not start a valid
///   literal or number, or violates the number grammar.
/// - [`ParseError::RootNotSingular`] if non-whitespace input remains after a
///   complete value.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(text);
    cursor.skip_whitespace();
    let value = cursor.parse_value()?;
    cursor.skip_whitespace();
    if cursor.peek().is_some() {
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

/// Scanner state for one `parse` call: the input text plus a read position.
///
/// The position is a byte index that only ever moves forward, and only ever
/// past ASCII bytes, so it always lands on a character boundary.
struct Cursor<'src> {
    input: &'src str,
    pos: usize,
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

impl<'src> Cursor<'src> {
    fn new(input: &'src str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes the current byte, which dispatch has already guaranteed to
    /// be `expected`. The guarantee is checked in debug builds.
    fn expect(&mut self, expected: u8) {
        debug_assert_eq!(self.peek(), Some(expected));
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b't') => self.parse_literal("true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal("false", Value::Boolean(false)),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(_) => self.parse_number(),
        }
    }

    /// Matches `literal` exactly. Dispatch guarantees the first byte; the
    /// rest are compared positionally, and running out of input is just
    /// another mismatch. Matching stops at the literal's own length, so a
    /// trailing token like the `x` in `truex` is left for the
    /// root-not-singular check.
    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value, ParseError> {
        let bytes = literal.as_bytes();
        self.expect(bytes[0]);
        for &b in &bytes[1..] {
            if self.peek() != Some(b) {
                return Err(ParseError::InvalidValue);
            }
            self.bump();
        }
        Ok(value)
    }

    /// Validates the JSON number grammar by scanning character classes, then
    /// converts the matched lexeme with the standard float parser.
    ///
    /// A leading `0` ends the integer part: in `0123` only the `0` is
    /// consumed here, and the remaining digits trip the root-not-singular
    /// check in the caller.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => {
                self.bump();
                self.eat_digits();
            }
            _ => return Err(ParseError::InvalidValue),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidValue);
            }
            self.eat_digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidValue);
            }
            self.eat_digits();
        }
        // Every byte consumed above is ASCII, so the lexeme slice is on
        // character boundaries. The grammar is a strict subset of what the
        // float parser accepts, so conversion cannot fail here.
        let lexeme = &self.input[start..self.pos];
        let number = lexeme.parse::<f64>().map_err(|_| ParseError::InvalidValue)?;
        Ok(Value::Number(number))
    }
}
