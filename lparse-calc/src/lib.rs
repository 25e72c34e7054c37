//! Parsing and evaluation of integer arithmetic expressions.
//!
//! Expressions consist of non-negative number literals, the binary operators `+`, `-`, `*`, `/`
//! and parentheses, with whitespace allowed between all tokens. The grammar rules are exposed as
//! the parsers [`expr`], [`term`] and [`factor`], while a [`Calculator`] parses complete inputs
//! and evaluates them:
//!
//! ```rust
//! use lparse_calc::{Calculator, Config};
//!
//! let calculator = Calculator::new(Config::default());
//! assert_eq!(calculator.evaluate("(5 * 7) + (31 - 9) + 21"), Ok(78));
//! assert_eq!(calculator.evaluate("10 - 4 - 3"), Ok(9));
//!
//! let calculator = Calculator::new(Config::default().left_assoc());
//! assert_eq!(calculator.evaluate("10 - 4 - 3"), Ok(3));
//! ```
#![warn(missing_docs)]

mod error;
mod expr;
mod grammar;

pub use error::Error;
pub use expr::{BinOp, Expr};
pub use grammar::{expr, factor, term, Associativity, Calculator, Config};
