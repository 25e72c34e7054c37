//! Functions building new parsers from existing parsers.
//!
//! All combinators take their argument parsers by value and return a new parser. Failures are
//! propagated unchanged by every combinator except [`alternative`], [`choice`], [`optional`] and
//! the repetition combinators, which recover from a failure by continuing from the input position
//! where the failed parser started.
use crate::{
    primitive::{string_equals, whitespace},
    Failure, Parsed, Parser, Success,
};

/// Always succeeds with `value`, consuming nothing.
#[inline]
pub fn pure<'a, T: Clone>(value: T) -> impl Fn(&'a str) -> Parsed<'a, T> {
    move |input: &'a str| Success {
        value: value.clone(),
        remaining: input,
    }
}

/// Always fails, consuming nothing.
#[inline]
pub fn fail<'a, T>() -> impl Fn(&'a str) -> Parsed<'a, T> {
    |input: &'a str| Failure { remaining: input }
}

/// Transforms the value of a successful parse.
#[inline]
pub fn map<'a, T, U>(
    parser: impl Parser<'a, T>,
    f: impl Fn(T) -> U,
) -> impl Fn(&'a str) -> Parsed<'a, U> {
    move |input: &'a str| parser.parse(input).map(&f)
}

/// Runs `parser` and then the parser returned by `f` for the parsed value.
///
/// The second parser runs on the input remaining after the first, and its result is the result of
/// the combined parser. As the second parser is selected based on the first value, this can parse
/// context sensitive input.
#[inline]
pub fn bind<'a, T, U, Q>(
    parser: impl Parser<'a, T>,
    f: impl Fn(T) -> Q,
) -> impl Fn(&'a str) -> Parsed<'a, U>
where
    Q: Parser<'a, U>,
{
    move |input: &'a str| {
        parser
            .parse(input)
            .and_then(|value, remaining| f(value).parse(remaining))
    }
}

/// Applies a parsed function to a parsed argument.
///
/// Together with [`pure`] this allows applying a curried function to the values of several
/// parsers run in sequence.
#[inline]
pub fn apply<'a, T, U, F>(
    function: impl Parser<'a, F>,
    argument: impl Parser<'a, T>,
) -> impl Fn(&'a str) -> Parsed<'a, U>
where
    F: FnOnce(T) -> U,
{
    move |input: &'a str| {
        function
            .parse(input)
            .and_then(|f, remaining| argument.parse(remaining).map(f))
    }
}

/// Tries `first` and, if it fails, `second` on the same input.
#[inline]
pub fn alternative<'a, T>(
    first: impl Parser<'a, T>,
    second: impl Parser<'a, T>,
) -> impl Fn(&'a str) -> Parsed<'a, T> {
    move |input: &'a str| first.parse(input).or_parse(|| second.parse(input))
}

/// A tuple of parsers that can be run one after another, see [`sequence`].
pub trait Sequence<'a, T> {
    /// Runs the parsers in order, each on the input remaining after the previous one.
    fn parse_sequence(&self, input: &'a str) -> Parsed<'a, T>;
}

/// A tuple of parsers that can be tried one after another, see [`choice`].
pub trait Choice<'a, T> {
    /// Tries the parsers in order on `input`, returning the first success.
    fn parse_choice(&self, input: &'a str) -> Parsed<'a, T>;
}

macro_rules! impl_sequence {
    ($($index:tt: $parser:ident => $value:ident $var:ident),+) => {
        impl<'a, $($parser, $value),+> Sequence<'a, ($($value,)+)> for ($($parser,)+)
        where
            $($parser: Parser<'a, $value>,)+
        {
            #[inline]
            fn parse_sequence(&self, input: &'a str) -> Parsed<'a, ($($value,)+)> {
                let remaining = input;
                $(
                    let ($var, remaining) = match self.$index.parse(remaining) {
                        Success { value, remaining } => (value, remaining),
                        Failure { remaining } => return Failure { remaining },
                    };
                )+
                Success {
                    value: ($($var,)+),
                    remaining,
                }
            }
        }
    };
}

macro_rules! impl_choice {
    ($($index:tt: $parser:ident),+) => {
        impl<'a, T, $($parser),+> Choice<'a, T> for ($($parser,)+)
        where
            $($parser: Parser<'a, T>,)+
        {
            #[inline]
            fn parse_choice(&self, input: &'a str) -> Parsed<'a, T> {
                let parsed = Failure { remaining: input };
                $(
                    let parsed = parsed.or_parse(|| self.$index.parse(input));
                )+
                parsed
            }
        }
    };
}

impl_sequence!(0: A => TA a);
impl_sequence!(0: A => TA a, 1: B => TB b);
impl_sequence!(0: A => TA a, 1: B => TB b, 2: C => TC c);
impl_sequence!(0: A => TA a, 1: B => TB b, 2: C => TC c, 3: D => TD d);
impl_sequence!(0: A => TA a, 1: B => TB b, 2: C => TC c, 3: D => TD d, 4: E => TE e);
impl_sequence!(
    0: A => TA a, 1: B => TB b, 2: C => TC c, 3: D => TD d, 4: E => TE e, 5: F => TF f
);
impl_sequence!(
    0: A => TA a, 1: B => TB b, 2: C => TC c, 3: D => TD d, 4: E => TE e, 5: F => TF f,
    6: G => TG g
);
impl_sequence!(
    0: A => TA a, 1: B => TB b, 2: C => TC c, 3: D => TD d, 4: E => TE e, 5: F => TF f,
    6: G => TG g, 7: H => TH h
);

impl_choice!(0: A, 1: B);
impl_choice!(0: A, 1: B, 2: C);
impl_choice!(0: A, 1: B, 2: C, 3: D);
impl_choice!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_choice!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
impl_choice!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
impl_choice!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);

/// Runs a tuple of parsers in order and collects all values into a tuple.
///
/// Fails as soon as one of the parsers fails, returning that parser's failure. Values parsed
/// before the failure are dropped.
#[inline]
pub fn sequence<'a, T>(parsers: impl Sequence<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, T> {
    move |input: &'a str| parsers.parse_sequence(input)
}

/// Tries a tuple of parsers from left to right, returning the first success.
///
/// Every parser runs on the same input. If all of them fail, the failure of the last one is
/// returned.
#[inline]
pub fn choice<'a, T>(parsers: impl Choice<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, T> {
    move |input: &'a str| parsers.parse_choice(input)
}

/// Applies `parser` as often as possible, passing each value to `action`.
///
/// Stops at the first failure or at the first success that did not consume any input. That last
/// value is discarded, otherwise a parser that always succeeds without consuming input would
/// repeat forever.
#[inline]
fn repeat<'a, T>(
    parser: &impl Parser<'a, T>,
    mut input: &'a str,
    mut action: impl FnMut(T),
) -> &'a str {
    while let Success { value, remaining } = parser.parse(input) {
        if remaining.len() >= input.len() {
            break;
        }
        action(value);
        input = remaining;
    }
    input
}

/// Applies `parser` zero or more times, collecting the values.
///
/// Never fails. Repetition stops when `parser` fails or succeeds without consuming input.
#[inline]
pub fn many<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, Vec<T>> {
    move |input: &'a str| {
        let mut values = vec![];
        let remaining = repeat(&parser, input, |value| values.push(value));
        Success {
            value: values,
            remaining,
        }
    }
}

/// Applies `parser` one or more times, collecting the values.
///
/// Fails iff the first application fails. Further applications follow the rules of [`many`].
#[inline]
pub fn some<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, Vec<T>> {
    move |input: &'a str| {
        parser.parse(input).and_then(|first, remaining| {
            let mut values = vec![first];
            let remaining = repeat(&parser, remaining, |value| values.push(value));
            Success {
                value: values,
                remaining,
            }
        })
    }
}

/// Applies `parser` zero or more times, discarding the values.
#[inline]
pub fn skip_many<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, ()> {
    move |input: &'a str| Success {
        value: (),
        remaining: repeat(&parser, input, drop),
    }
}

/// Makes `parser` optional, succeeding with `None` without consuming input when it fails.
#[inline]
pub fn optional<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, Option<T>> {
    move |input: &'a str| match parser.parse(input) {
        Success { value, remaining } => Success {
            value: Some(value),
            remaining,
        },
        Failure { .. } => Success {
            value: None,
            remaining: input,
        },
    }
}

/// Runs `prefix` and then `parser`, keeping only the value of `parser`.
#[inline]
pub fn preceded<'a, T, P>(
    prefix: impl Parser<'a, P>,
    parser: impl Parser<'a, T>,
) -> impl Fn(&'a str) -> Parsed<'a, T> {
    move |input: &'a str| {
        prefix
            .parse(input)
            .and_then(|_, remaining| parser.parse(remaining))
    }
}

/// Runs `parser` and then `suffix`, keeping only the value of `parser`.
#[inline]
pub fn terminated<'a, T, S>(
    parser: impl Parser<'a, T>,
    suffix: impl Parser<'a, S>,
) -> impl Fn(&'a str) -> Parsed<'a, T> {
    move |input: &'a str| {
        parser
            .parse(input)
            .and_then(|value, remaining| suffix.parse(remaining).map(|_| value))
    }
}

/// Runs `open`, `parser` and `close` in order, keeping only the value of `parser`.
#[inline]
pub fn delimited<'a, T, O, C>(
    open: impl Parser<'a, O>,
    parser: impl Parser<'a, T>,
    close: impl Parser<'a, C>,
) -> impl Fn(&'a str) -> Parsed<'a, T> {
    preceded(open, terminated(parser, close))
}

/// Replaces the value of `parser` with the part of the input it consumed.
#[inline]
pub fn recognize<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    move |input: &'a str| {
        parser.parse(input).and_then(|_, remaining| Success {
            value: &input[..input.len() - remaining.len()],
            remaining,
        })
    }
}

/// Fails without consuming input when the value of `parser` does not satisfy `predicate`.
#[inline]
pub fn verify<'a, T>(
    parser: impl Parser<'a, T>,
    predicate: impl Fn(&T) -> bool,
) -> impl Fn(&'a str) -> Parsed<'a, T> {
    move |input: &'a str| match parser.parse(input) {
        Success { value, .. } if !predicate(&value) => Failure { remaining: input },
        parsed => parsed,
    }
}

/// Parses one or more occurrences of `parser` separated by `separator`, collecting the values.
///
/// A trailing separator is not consumed.
#[inline]
pub fn separated<'a, T, S>(
    parser: impl Parser<'a, T>,
    separator: impl Parser<'a, S>,
) -> impl Fn(&'a str) -> Parsed<'a, Vec<T>> {
    move |input: &'a str| {
        parser.parse(input).and_then(|first, remaining| {
            let mut values = vec![first];
            let next = preceded(&separator, &parser);
            let remaining = repeat(&next, remaining, |value| values.push(value));
            Success {
                value: values,
                remaining,
            }
        })
    }
}

/// Skips whitespace around `parser`.
///
/// Succeeds iff `parser` succeeds on the input following any leading whitespace. Whitespace
/// following the match is consumed as well.
#[inline]
pub fn token<'a, T>(parser: impl Parser<'a, T>) -> impl Fn(&'a str) -> Parsed<'a, T> {
    delimited(skip_many(whitespace), parser, skip_many(whitespace))
}

/// Matches the string `literal`, skipping surrounding whitespace.
#[inline]
pub fn symbol<'a>(literal: impl AsRef<str>) -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    token(string_equals(literal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{char_equals, digit, item, letter};

    fn digit_value(input: &str) -> Parsed<'_, u32> {
        map(digit, |c| c.to_digit(10).unwrap_or_default()).parse(input)
    }

    #[test]
    fn pure_consumes_nothing() {
        for input in ["", "abc", "  1"] {
            assert_eq!(
                pure(1).parse(input),
                Success {
                    value: 1,
                    remaining: input
                }
            );
        }
        assert_eq!(fail::<u8>().parse("abc"), Failure { remaining: "abc" });
    }

    #[test]
    fn map_identity() {
        for input in ["", "7x", "x7"] {
            assert_eq!(map(digit, |c| c).parse(input), digit(input));
        }
        assert_eq!(
            map(item, |c| c.to_ascii_uppercase()).parse("abc"),
            Success {
                value: 'A',
                remaining: "bc"
            }
        );
    }

    #[test]
    fn bind_left_identity() {
        let f = |c: char| map(char_equals(c), move |d| (c, d));
        for input in ["aab", "ab", ""] {
            assert_eq!(bind(pure('a'), f).parse(input), f('a').parse(input));
        }
    }

    #[test]
    fn bind_depends_on_value() {
        // A digit followed by the same digit again.
        let twice = bind(digit, char_equals);
        assert_eq!(
            twice.parse("33x"),
            Success {
                value: '3',
                remaining: "x"
            }
        );
        assert_eq!(twice.parse("34x"), Failure { remaining: "4x" });
        assert_eq!(twice.parse("x"), Failure { remaining: "x" });
    }

    #[test]
    fn applicative_combination() {
        let first_and_third = pure(|x: char| move |_: char| move |z: char| (x, z));
        let parser = apply(apply(apply(first_and_third, item), item), item);
        assert_eq!(
            parser.parse("abcdef"),
            Success {
                value: ('a', 'c'),
                remaining: "def"
            }
        );
        assert_eq!(parser.parse("ab"), Failure { remaining: "" });
    }

    #[test]
    fn sequences() {
        let parser = sequence((char_equals('I'), char_equals('n'), char_equals('g')));
        assert_eq!(
            parser.parse("Inghe"),
            Success {
                value: ('I', 'n', 'g'),
                remaining: "he"
            }
        );
        assert_eq!(parser.parse("Inhe"), Failure { remaining: "he" });

        let single = sequence((digit,));
        assert_eq!(single.parse("1").value(), Some(('1',)));
    }

    #[test]
    fn alternative_backtracks_to_original_input() {
        let first = sequence((char_equals('a'), char_equals('b')));
        let second = sequence((char_equals('a'), char_equals('c')));
        for input in ["ac", "ab", "ad", ""] {
            let expected = match first.parse(input) {
                Failure { .. } => second.parse(input),
                success => success,
            };
            assert_eq!(alternative(&first, &second).parse(input), expected);
        }
        assert_eq!(
            alternative(&first, &second).parse("acx"),
            Success {
                value: ('a', 'c'),
                remaining: "x"
            }
        );
        assert_eq!(alternative(fail(), item).parse("abc"), item("abc"));
    }

    #[test]
    fn choices() {
        let sign = choice((char_equals('+'), char_equals('-'), char_equals('*')));
        assert_eq!(sign.parse("*1").value(), Some('*'));
        assert_eq!(sign.parse("-1").value(), Some('-'));
        assert_eq!(sign.parse("/1"), Failure { remaining: "/1" });
    }

    #[test]
    fn repetition() {
        assert_eq!(
            many(digit).parse("123abc"),
            Success {
                value: vec!['1', '2', '3'],
                remaining: "abc"
            }
        );
        assert_eq!(
            many(digit).parse("abc"),
            Success {
                value: vec![],
                remaining: "abc"
            }
        );
        assert_eq!(
            some(letter).parse("abc123abc"),
            Success {
                value: vec!['a', 'b', 'c'],
                remaining: "123abc"
            }
        );
        assert_eq!(some(digit).parse("x23abc"), Failure { remaining: "x23abc" });
        assert_eq!(
            skip_many(char_equals(' ')).parse("   x"),
            Success {
                value: (),
                remaining: "x"
            }
        );
    }

    #[test]
    fn repetition_without_progress_terminates() {
        assert_eq!(
            many(pure(1)).parse("abc"),
            Success {
                value: vec![],
                remaining: "abc"
            }
        );
        assert_eq!(
            some(pure(1)).parse("abc"),
            Success {
                value: vec![1],
                remaining: "abc"
            }
        );
        assert_eq!(many(many(digit)).parse("12a").remaining(), "a");
    }

    #[test]
    fn some_agrees_with_first_application() {
        for input in ["", "a", "7", "789x"] {
            match (digit_value(input), some(digit_value).parse(input)) {
                (Failure { .. }, parsed) => assert!(!parsed.is_success()),
                (Success { value, .. }, parsed) => {
                    assert_eq!(parsed.value().map(|values| values[0]), Some(value))
                }
            }
        }
    }

    #[test]
    fn optional_values() {
        assert_eq!(
            optional(digit).parse("1a"),
            Success {
                value: Some('1'),
                remaining: "a"
            }
        );
        assert_eq!(
            optional(digit).parse("a"),
            Success {
                value: None,
                remaining: "a"
            }
        );
    }

    #[test]
    fn delimiters() {
        let parenthesized = delimited(char_equals('('), digit, char_equals(')'));
        assert_eq!(
            parenthesized.parse("(1)x"),
            Success {
                value: '1',
                remaining: "x"
            }
        );
        assert_eq!(parenthesized.parse("(1x"), Failure { remaining: "x" });
        assert_eq!(
            preceded(char_equals('-'), digit).parse("-1").value(),
            Some('1')
        );
        assert_eq!(
            terminated(digit, char_equals(';')).parse("1;").value(),
            Some('1')
        );
    }

    #[test]
    fn recognized_input() {
        assert_eq!(
            recognize(sequence((letter, many(digit)))).parse("ab12"),
            Success {
                value: "a",
                remaining: "b12"
            }
        );
        assert_eq!(
            recognize(some(digit)).parse("1789abc"),
            Success {
                value: "1789",
                remaining: "abc"
            }
        );
    }

    #[test]
    fn verified_values() {
        let even = verify(digit_value, |value| value % 2 == 0);
        assert_eq!(even.parse("4").value(), Some(4));
        assert_eq!(even.parse("3"), Failure { remaining: "3" });
    }

    #[test]
    fn separated_values() {
        let digits = separated(digit_value, char_equals(','));
        assert_eq!(
            digits.parse("1,2,3;"),
            Success {
                value: vec![1, 2, 3],
                remaining: ";"
            }
        );
        assert_eq!(
            digits.parse("1,2,;"),
            Success {
                value: vec![1, 2],
                remaining: ",;"
            }
        );
        assert_eq!(digits.parse(";"), Failure { remaining: ";" });
    }

    #[test]
    fn tokens_and_symbols() {
        assert_eq!(
            token(digit).parse("  1  x"),
            Success {
                value: '1',
                remaining: "x"
            }
        );
        assert_eq!(token(digit).parse("  x"), Failure { remaining: "x" });
        assert_eq!(
            symbol("x").parse(" x = 123 "),
            Success {
                value: "x",
                remaining: "= 123 "
            }
        );
        assert_eq!(symbol("A").parse(" [ x ] ").value(), None);
    }
}
