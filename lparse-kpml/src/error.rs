use lparse::ParseError;
use thiserror::Error;

/// Error returned when parsing a program or expression.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a well-formed program or expression.
    #[error(transparent)]
    Syntax(#[from] ParseError),
}
