use quickcheck_macros::quickcheck;
use std::{format, string::String};

use crate::parse;

#[quickcheck]
fn reparsing_is_deterministic(input: String) -> bool {
    parse(&input) == parse(&input)
}

#[quickcheck]
fn never_panics_on_arbitrary_input(input: String) -> bool {
    let _ = parse(&input);
    true
}

#[quickcheck]
fn whitespace_framing_preserves_a_valid_parse(input: String, pre: u8, post: u8) -> bool {
    match parse(&input) {
        Ok(value) => {
            let framed = format!(
                "{}{}{}",
                " ".repeat(usize::from(pre % 8)),
                input,
                "\t".repeat(usize::from(post % 8))
            );
            parse(&framed) == Ok(value)
        }
        Err(_) => true,
    }
}

#[quickcheck]
fn finite_floats_round_trip_through_display(n: f64) -> bool {
    if !n.is_finite() {
        return true;
    }
    let rendered = format!("{n}");
    match parse(&rendered) {
        Ok(value) => value.number() == n,
        Err(_) => false,
    }
}
