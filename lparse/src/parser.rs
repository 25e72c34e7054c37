/// Return type of every parser: either a parsed value together with the unconsumed input, or a
/// failure together with the input position at which the failure was detected.
///
/// Both variants hold the remaining input as a suffix of the input that was passed to the parser.
/// A parser never fabricates or reorders input, it only ever slices off a prefix. Because the
/// input itself is never modified, a caller can retry a different parser on the same input after
/// a failure, which is how [`alternative`][crate::alternative] implements backtracking.
///
/// Two `Parsed` values are equal when both are failures at the same position or both are
/// successes with equal values at the same position. Remainders are compared by content, which is
/// equivalent to comparing positions as long as both are suffixes of the same input.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed<'a, T> {
    /// The parser matched and produced `value`.
    ///
    /// `remaining` is the input following the matched part.
    Success {
        /// The parsed value.
        value: T,
        /// The unconsumed input.
        remaining: &'a str,
    },
    /// The input does not match the expected input of the parser.
    ///
    /// `remaining` points at the position where the mismatch was detected. This can be further
    /// into the input than where the failed parser started, but the caller's own input is left
    /// untouched, so another parser can be tried from the start.
    Failure {
        /// The input at the point of failure.
        remaining: &'a str,
    },
}

pub use Parsed::*;

impl<'a, T> Parsed<'a, T> {
    /// Returns whether the parser matched.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success { .. })
    }

    /// Returns the unconsumed input, or the input at the point of failure.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        match *self {
            Success { remaining, .. } | Failure { remaining } => remaining,
        }
    }

    /// Returns the parsed value, discarding the remaining input.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Success { value, .. } => Some(value),
            Failure { .. } => None,
        }
    }

    /// Converts into a [`Result`] of the value and the remaining input, with the failure position
    /// as error.
    #[inline]
    pub fn into_result(self) -> Result<(T, &'a str), &'a str> {
        match self {
            Success { value, remaining } => Ok((value, remaining)),
            Failure { remaining } => Err(remaining),
        }
    }

    /// Returns the byte offset of the remaining input within `source`.
    ///
    /// `source` has to be the input (or a prefix-extension of the input) this result was parsed
    /// from.
    #[inline]
    pub fn offset_in(&self, source: &str) -> usize {
        let remaining = self.remaining();
        debug_assert!(source.ends_with(remaining));
        source.len() - remaining.len()
    }

    /// Replaces a successfully parsed value with the value returned when applying the function `f`
    /// to it.
    ///
    /// A failure is returned unchanged.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<'a, U> {
        match self {
            Success { value, remaining } => Success {
                value: f(value),
                remaining,
            },
            Failure { remaining } => Failure { remaining },
        }
    }

    /// Continues parsing after a success.
    ///
    /// The function `parse` receives the parsed value and the remaining input and returns the
    /// result of the combined parse. A failure is returned unchanged.
    #[inline]
    pub fn and_then<U>(self, parse: impl FnOnce(T, &'a str) -> Parsed<'a, U>) -> Parsed<'a, U> {
        match self {
            Success { value, remaining } => parse(value, remaining),
            Failure { remaining } => Failure { remaining },
        }
    }

    /// Tries a different parser when the returning parser did not match.
    ///
    /// The alternative is expected to run on the same input the failed parser started on. The
    /// failure position of the first parser is discarded.
    #[inline]
    pub fn or_parse(self, parse: impl FnOnce() -> Parsed<'a, T>) -> Parsed<'a, T> {
        match self {
            Failure { .. } => parse(),
            success => success,
        }
    }
}

/// A parser producing values of type `T` from input borrowed for `'a`.
///
/// Every function or closure taking a `&'a str` and returning a [`Parsed<'a, T>`] is a parser.
/// This makes plain `fn` items usable as (possibly mutually recursive) grammar rules and lets the
/// combinators of this crate return closures. As `&F` implements `Fn` for any `F: Fn`, a shared
/// reference to a parser is a parser as well, so a parser can be used in several places without
/// being cloned.
pub trait Parser<'a, T>: Fn(&'a str) -> Parsed<'a, T> {
    /// Runs the parser on `input`.
    #[inline]
    fn parse(&self, input: &'a str) -> Parsed<'a, T> {
        self(input)
    }
}

impl<'a, T, F> Parser<'a, T> for F where F: Fn(&'a str) -> Parsed<'a, T> + ?Sized {}

/// A type erased parser.
///
/// Useful to store parsers of different types in a collection or to break up very deeply nested
/// combinator types.
pub type BoxedParser<'a, T> = Box<dyn Fn(&'a str) -> Parsed<'a, T> + 'a>;

/// Erases the type of a parser.
pub fn boxed<'a, T>(parser: impl Parser<'a, T> + 'a) -> BoxedParser<'a, T> {
    Box::new(move |input| parser.parse(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword<'a>(input: &'a str, word: &str) -> Parsed<'a, ()> {
        match input.strip_prefix(word) {
            Some(remaining) => Success {
                value: (),
                remaining,
            },
            None => Failure { remaining: input },
        }
    }

    fn digit_value(input: &str) -> Parsed<'_, u32> {
        let mut chars = input.chars();
        match chars.next().and_then(|c| c.to_digit(10)) {
            Some(value) => Success {
                value,
                remaining: chars.as_str(),
            },
            None => Failure { remaining: input },
        }
    }

    fn entry(input: &str) -> Parsed<'_, Option<u32>> {
        keyword(input, "value ")
            .and_then(|(), rest| digit_value(rest).map(Some))
            .or_parse(|| keyword(input, "none").map(|()| None))
    }

    #[test]
    fn parsing() {
        assert_eq!(
            entry("value 7;"),
            Success {
                value: Some(7),
                remaining: ";"
            }
        );
        assert_eq!(
            entry("none;"),
            Success {
                value: None,
                remaining: ";"
            }
        );
        assert_eq!(entry("value x"), Failure { remaining: "value x" });
        assert_eq!(entry("wrong"), Failure { remaining: "wrong" });
    }

    #[test]
    fn failure_keeps_position_of_mismatch() {
        let parsed = keyword("value x", "value ").and_then(|(), rest| digit_value(rest));
        assert_eq!(parsed, Failure { remaining: "x" });
        assert_eq!(parsed.offset_in("value x"), 6);
    }

    #[test]
    fn accessors() {
        let parsed = digit_value("42");
        assert!(parsed.is_success());
        assert_eq!(parsed.remaining(), "2");
        assert_eq!(parsed.into_result(), Ok((4, "2")));
        assert_eq!(parsed.value(), Some(4));

        let parsed = digit_value("x");
        assert!(!parsed.is_success());
        assert_eq!(parsed.into_result(), Err("x"));
        assert_eq!(parsed.value(), None);
    }

    #[test]
    fn boxed_parsers() {
        let parsers: Vec<BoxedParser<'_, u32>> = vec![
            boxed(digit_value),
            boxed(|input| keyword(input, "ten").map(|()| 10)),
        ];
        assert_eq!(parsers[0].parse("1").value(), Some(1));
        assert_eq!(parsers[1].parse("ten").value(), Some(10));
        assert_eq!(parsers[1].parse("1"), Failure { remaining: "1" });
    }
}
