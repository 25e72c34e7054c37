use lparse::ParseError;
use thiserror::Error;

/// Error returned when parsing or evaluating an arithmetic expression.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input is not a well-formed expression.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// A division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// An intermediate result does not fit into an `i64`.
    ///
    /// Number literals are checked during parsing, so a literal that is out of range is reported as
    /// [`Error::Syntax`] instead.
    #[error("arithmetic overflow")]
    Overflow,
}
