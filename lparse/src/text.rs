//! Lexical parsers for common text based constructs built from the primitives and combinators.
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, Zero};

use crate::{
    alphanumeric, alternative, char_equals, delimited, digit, letter, lower, map, preceded,
    recognize, satisfies, separated, sequence, skip_many, some, symbol, token, whitespace, Failure,
    Parsed, Parser, Success,
};

/// Parses a run of ASCII digits as decimal number.
///
/// Each digit is combined with the value so far using `step` after multiplying that value by ten.
/// Returns `None` if the number does not fit into `I`.
#[inline]
fn ascii_digits<I>(digits: &str, step: impl Fn(&I, &I) -> Option<I>) -> Option<I>
where
    I: Zero + FromPrimitive + CheckedMul,
{
    let ten = I::from_u8(10)?;
    digits.bytes().try_fold(I::zero(), |value, digit| {
        let digit = I::from_u8(digit - b'0')?;
        step(&value.checked_mul(&ten)?, &digit)
    })
}

/// Parses one or more ASCII digits as a non-negative decimal number.
///
/// Fails without consuming input if there is no digit or if the number does not fit into `I`.
/// Does not skip any whitespace.
#[inline]
pub fn nat<I>(input: &str) -> Parsed<'_, I>
where
    I: Zero + FromPrimitive + CheckedAdd + CheckedMul,
{
    recognize(some(digit))
        .parse(input)
        .and_then(|digits, remaining| match ascii_digits(digits, I::checked_add) {
            Some(value) => Success { value, remaining },
            None => Failure { remaining: input },
        })
}

/// Parses one or more ASCII digits and negates the resulting number.
///
/// The digits are accumulated negatively, so that the minimum value of a signed type can be
/// parsed.
#[inline]
fn negative_nat<I>(input: &str) -> Parsed<'_, I>
where
    I: Zero + FromPrimitive + CheckedSub + CheckedMul,
{
    recognize(some(digit))
        .parse(input)
        .and_then(|digits, remaining| match ascii_digits(digits, I::checked_sub) {
            Some(value) => Success { value, remaining },
            None => Failure { remaining: input },
        })
}

/// Parses a decimal number, optionally prefixed by `'-'`.
///
/// The unsigned form is tried first. A `'-'` has to be directly followed by a digit. Does not skip
/// any whitespace and does not handle an explicit positive sign `'+'`.
#[inline]
pub fn int<I>(input: &str) -> Parsed<'_, I>
where
    I: Zero + FromPrimitive + CheckedAdd + CheckedSub + CheckedMul,
{
    alternative(nat::<I>, preceded(char_equals('-'), negative_nat::<I>)).parse(input)
}

/// Parses a non-negative decimal number, skipping surrounding whitespace.
pub fn natural(input: &str) -> Parsed<'_, u64> {
    token(nat::<u64>).parse(input)
}

/// Parses a decimal number with an optional `'-'` sign, skipping surrounding whitespace.
pub fn integer(input: &str) -> Parsed<'_, i64> {
    token(int::<i64>).parse(input)
}

/// Passes over zero or more whitespace characters, returning the skipped part of the input.
pub fn space(input: &str) -> Parsed<'_, &str> {
    recognize(skip_many(whitespace)).parse(input)
}

/// Parses an identifier: a lowercase letter followed by letters, digits or underscores.
pub fn identifier(input: &str) -> Parsed<'_, &str> {
    recognize(sequence((
        lower,
        skip_many(satisfies(|c| c.is_ascii_alphanumeric() || c == '_')),
    )))
    .parse(input)
}

/// Parses a word: a letter followed by letters or digits, skipping surrounding whitespace.
pub fn word(input: &str) -> Parsed<'_, &str> {
    token(recognize(sequence((letter, skip_many(alphanumeric))))).parse(input)
}

/// Parses one or more occurrences of `parser` separated by commas.
///
/// Whitespace around the commas is skipped.
pub fn params<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, Vec<T>> {
    separated(parser, symbol(","))
}

/// Parses a bracketed list of one or more comma separated occurrences of `parser`.
///
/// Whitespace around the brackets and commas is skipped.
pub fn list<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, Vec<T>> {
    delimited(symbol("["), params(parser), symbol("]"))
}

/// Parses `name = value` where both sides are [identifiers][identifier].
pub fn assign(input: &str) -> Parsed<'_, (&str, &str)> {
    map(
        sequence((identifier, space, char_equals('='), space, identifier)),
        |(name, _, _, _, value)| (name, value),
    )
    .parse(input)
}

/// Parses a bracketed list of [naturals][natural].
pub fn naturals(input: &str) -> Parsed<'_, Vec<u64>> {
    list(natural).parse(input)
}

/// Parses a bracketed list of single letters or digits.
pub fn alphanumerics(input: &str) -> Parsed<'_, Vec<char>> {
    list(token(alphanumeric)).parse(input)
}
