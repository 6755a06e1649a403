//! Strict parser for standalone JSON scalar values.
//!
//! This crate recognizes exactly one JSON value per input — `null`, `true`,
//! `false`, or a number — surrounded by optional whitespace. Anything else is
//! rejected with a [`ParseError`] describing the failure class. Strings,
//! arrays, and objects are out of scope.
//!
//! ```
//! use jsonatom::{parse, ParseError, Value};
//!
//! assert_eq!(parse("true"), Ok(Value::Boolean(true)));
//! assert_eq!(parse(" 3.1416 "), Ok(Value::Number(3.1416)));
//! assert_eq!(parse(""), Err(ParseError::ExpectValue));
//! assert_eq!(parse("true false"), Err(ParseError::RootNotSingular));
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::parse;
pub use value::{Value, ValueKind};
