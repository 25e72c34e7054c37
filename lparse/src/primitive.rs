//! Parsers consuming single characters or fixed strings.
use crate::{Failure, Parsed, Parser, Success};

/// Consumes exactly one character.
///
/// Fails on empty input.
#[inline]
pub fn item(input: &str) -> Parsed<'_, char> {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) => Success {
            value: c,
            remaining: chars.as_str(),
        },
        None => Failure { remaining: input },
    }
}

/// Consumes one character if it satisfies `predicate`.
///
/// Fails without consuming anything when the input is empty or the next character does not
/// satisfy the predicate.
#[inline]
pub fn satisfies<'a>(predicate: impl Fn(char) -> bool) -> impl Fn(&'a str) -> Parsed<'a, char> {
    move |input: &'a str| match item(input) {
        Success { value, remaining } if predicate(value) => Success { value, remaining },
        _ => Failure { remaining: input },
    }
}

/// Consumes the character `expected`.
#[inline]
pub fn char_equals<'a>(expected: char) -> impl Fn(&'a str) -> Parsed<'a, char> {
    satisfies(move |c| c == expected)
}

/// Consumes the string `literal` when the input starts with it.
///
/// The match is anchored at the current position: nothing is skipped to find the literal further
/// into the input. Returns the matched part of the input.
#[inline]
pub fn string_equals<'a>(literal: impl AsRef<str>) -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    move |input: &'a str| {
        let literal = literal.as_ref();
        if input.starts_with(literal) {
            let (value, remaining) = input.split_at(literal.len());
            Success { value, remaining }
        } else {
            Failure { remaining: input }
        }
    }
}

/// Succeeds without consuming anything when there is no input left.
#[inline]
pub fn end_of_input(input: &str) -> Parsed<'_, ()> {
    if input.is_empty() {
        Success {
            value: (),
            remaining: input,
        }
    } else {
        Failure { remaining: input }
    }
}

/// Consumes an ASCII decimal digit.
pub fn digit(input: &str) -> Parsed<'_, char> {
    satisfies(|c| c.is_ascii_digit()).parse(input)
}

/// Consumes an ASCII lowercase letter.
pub fn lower(input: &str) -> Parsed<'_, char> {
    satisfies(|c| c.is_ascii_lowercase()).parse(input)
}

/// Consumes an ASCII uppercase letter.
pub fn upper(input: &str) -> Parsed<'_, char> {
    satisfies(|c| c.is_ascii_uppercase()).parse(input)
}

/// Consumes an ASCII letter.
pub fn letter(input: &str) -> Parsed<'_, char> {
    satisfies(|c| c.is_ascii_alphabetic()).parse(input)
}

/// Consumes an ASCII letter or digit.
pub fn alphanumeric(input: &str) -> Parsed<'_, char> {
    satisfies(|c| c.is_ascii_alphanumeric()).parse(input)
}

/// Consumes an ASCII whitespace character.
pub fn whitespace(input: &str) -> Parsed<'_, char> {
    satisfies(|c| c.is_ascii_whitespace()).parse(input)
}
