use std::fmt;

use crate::{end_of_input, preceded, skip_many, terminated, whitespace, Failure, Parser, Success};

/// A parse failure converted into an error.
///
/// Within a grammar a failure is an ordinary [`Parsed`][crate::Parsed] value that other parsers
/// recover from. This type is used at the boundary, once a failure is final. It only records where
/// parsing stopped.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    /// The byte offset into the input at which the failure was detected, or at which unexpected
    /// trailing input starts.
    pub offset: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected input at byte offset {}", self.offset)
    }
}

impl std::error::Error for ParseError {}

/// Runs `parser` on `input` requiring it to consume everything except trailing whitespace.
pub fn parse_complete<'a, T>(parser: impl Parser<'a, T>, input: &'a str) -> Result<T, ParseError> {
    let complete = terminated(parser, preceded(skip_many(whitespace), end_of_input));
    match complete.parse(input) {
        Success { value, .. } => Ok(value),
        failure @ Failure { .. } => Err(ParseError {
            offset: failure.offset_in(input),
        }),
    }
}
