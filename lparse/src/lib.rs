//! The lparse crate is a small collection of backtracking parser combinators over string slices.
//!
//! Grammars are written as plain Rust functions and closures that are composed declaratively from
//! a handful of primitives:
//!
//! * _Pure_: A parser is a function from the input to a [`Parsed`] value. Parsers do not mutate
//!   any shared state, so running a parser twice on the same input always gives the same result.
//!   Values are threaded through the combinators functionally, each callback returns a new value
//!   instead of updating a captured variable.
//!
//! * _Backtracking_: The input is an immutable `&str`. Consuming input means slicing off a
//!   prefix, so after a failure another parser can simply be tried on the original slice. This
//!   is what [`alternative`] and [`choice`] do.
//!
//! * _Leftover input_: Every result carries the unconsumed rest of the input, a suffix of the input
//!   passed to the parser. On failure it points at the position where the mismatch was detected.
//!   There are no further diagnostics; [`parse_complete`] turns a final failure into a
//!   [`ParseError`] holding just the byte offset.
//!
//! * _Recursive-descent_: Grammar rules are usually `fn` items that build a parser from
//!   combinators and run it on their input. Such functions can refer to each other recursively
//!   without any boxing. Right-recursive rules work as expected, left-recursive rules do not
//!   terminate.
//!
//! ## Using lparse
//!
//! ```rust
//! use lparse::*;
//!
//! // A comma separated list of digits within parentheses.
//! fn digits(input: &str) -> Parsed<'_, Vec<char>> {
//!     delimited(symbol("("), params(token(digit)), symbol(")")).parse(input)
//! }
//!
//! assert_eq!(
//!     digits("(1, 2, 3) rest"),
//!     Success {
//!         value: vec!['1', '2', '3'],
//!         remaining: "rest"
//!     }
//! );
//! assert_eq!(digits("(1, x)"), Failure { remaining: ", x)" });
//! ```
//!
//! The combinators in [`combinator`] build parsers from parsers, the functions in [`primitive`]
//! consume single characters or fixed strings and the functions in [`text`] parse common lexical
//! constructs like numbers, identifiers and lists.

#![warn(missing_docs)]
pub mod combinator;
mod error;
mod parser;
pub mod primitive;
pub mod text;

pub use combinator::{
    alternative, apply, bind, choice, delimited, fail, many, map, optional, preceded, pure,
    recognize, separated, sequence, skip_many, some, symbol, terminated, token, verify, Choice,
    Sequence,
};
pub use error::{parse_complete, ParseError};
pub use parser::{boxed, BoxedParser, Parsed, Parser};
pub use primitive::{
    alphanumeric, char_equals, digit, end_of_input, item, letter, lower, satisfies, string_equals,
    upper, whitespace,
};
pub use text::{
    alphanumerics, assign, identifier, int, integer, list, nat, natural, naturals, params, space,
    word,
};

pub use Parsed::*;
