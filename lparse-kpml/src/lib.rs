//! Parsing of kpml, a small expression language, into [`Statement`] trees.
//!
//! A kpml program is a sequence of statements. Statements are assignments and expressions
//! terminated by `;`, conditionals and function definitions:
//!
//! ```text
//! fn max(a, b) {
//!     if (a - b) { a; } else { b; }
//! }
//! x = max(3, 2 * y) + 1;
//! ```
//!
//! Expressions are built from natural numbers, variables, calls, parentheses and the binary
//! operators `+`, `-`, `*` and `/`. See [`Statement`] for the shape of the resulting trees and
//! the [`grammar`] module for the individual rules.
#![warn(missing_docs)]

pub mod grammar;

mod error;
mod statement;

pub use error::Error;
pub use statement::{Program, Scalar, Statement, UNSET_OPERATOR};

/// Parses a complete program.
pub fn parse_program(source: &str) -> Result<Program, Error> {
    lparse::parse_complete(grammar::program, source).map_err(Error::from)
}

/// Parses a single expression, which has to span all of `source` apart from surrounding
/// whitespace.
pub fn parse_expression(source: &str) -> Result<Statement, Error> {
    lparse::parse_complete(grammar::expression, source).map_err(Error::from)
}
