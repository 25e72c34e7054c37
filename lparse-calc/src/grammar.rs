//! Recursive-descent grammar for integer arithmetic.
//!
//! ```text
//! factor := space '(' space expr space ')' space | nat
//! term   := space factor (space ('*' | '/') space term space)?
//! expr   := space term (space ('+' | '-') space expr space)?
//! ```
//!
//! The rules [`expr`], [`term`] and [`factor`] recurse on the right, so chains of operators with
//! the same precedence group to the right: `10 - 4 - 3` is `10 - (4 - 3)`. A [`Calculator`]
//! configured for [`Associativity::Left`] parses operator chains as repetitions instead and groups
//! them to the left.
use lparse::{
    alternative, char_equals, delimited, many, map, nat, optional, parse_complete, sequence, space,
    Parsed, Parser,
};

use crate::{BinOp, Error, Expr};

/// Grouping of chained operators of the same precedence.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub enum Associativity {
    /// `a - b - c` is `a - (b - c)`.
    #[default]
    Right,
    /// `a - b - c` is `(a - b) - c`.
    Left,
}

/// Configuration for the [`Calculator`].
#[derive(Copy, Clone, Default, Debug)]
#[non_exhaustive]
pub struct Config {
    /// How chains of operators with the same precedence are grouped. (Default:
    /// [`Associativity::Right`])
    pub associativity: Associativity,
}

impl Config {
    #[inline]
    /// Sets the [`associativity`][Self#structfield.associativity] field.
    pub fn associativity(mut self, value: Associativity) -> Self {
        self.associativity = value;
        self
    }

    #[inline]
    /// Sets the [`associativity`][Self#structfield.associativity] field to
    /// [`Associativity::Left`].
    pub fn left_assoc(self) -> Self {
        self.associativity(Associativity::Left)
    }
}

fn additive(input: &str) -> Parsed<'_, BinOp> {
    alternative(
        map(char_equals('+'), |_| BinOp::Add),
        map(char_equals('-'), |_| BinOp::Sub),
    )
    .parse(input)
}

fn multiplicative(input: &str) -> Parsed<'_, BinOp> {
    alternative(
        map(char_equals('*'), |_| BinOp::Mul),
        map(char_equals('/'), |_| BinOp::Div),
    )
    .parse(input)
}

/// A parenthesized `inner` expression or a number.
fn factor_of<'a>(input: &'a str, inner: fn(&str) -> Parsed<'_, Expr>) -> Parsed<'a, Expr> {
    alternative(
        delimited(
            sequence((space, char_equals('('), space)),
            inner,
            sequence((space, char_equals(')'), space)),
        ),
        map(nat::<i64>, Expr::Number),
    )
    .parse(input)
}

/// Parses a number or a parenthesized expression.
pub fn factor(input: &str) -> Parsed<'_, Expr> {
    factor_of(input, expr)
}

/// Parses a product or quotient of factors, grouping to the right.
pub fn term(input: &str) -> Parsed<'_, Expr> {
    right_chain(input, factor, multiplicative, term)
}

/// Parses a sum or difference of terms, grouping to the right.
pub fn expr(input: &str) -> Parsed<'_, Expr> {
    right_chain(input, term, additive, expr)
}

/// Parses `operand`, optionally followed by `operator` and `rest`.
///
/// The operand is parsed once, whether or not an operator follows.
fn right_chain<'a>(
    input: &'a str,
    operand: fn(&str) -> Parsed<'_, Expr>,
    operator: fn(&str) -> Parsed<'_, BinOp>,
    rest: fn(&str) -> Parsed<'_, Expr>,
) -> Parsed<'a, Expr> {
    map(
        sequence((
            space,
            operand,
            optional(sequence((space, operator, space, rest, space))),
        )),
        |(_, lhs, tail)| match tail {
            Some((_, op, _, rhs, _)) => Expr::binary(op, lhs, rhs),
            None => lhs,
        },
    )
    .parse(input)
}

/// Parses `operand` one or more times separated by `operator`, folding from the left.
fn left_chain<'a>(
    input: &'a str,
    operand: fn(&str) -> Parsed<'_, Expr>,
    operator: fn(&str) -> Parsed<'_, BinOp>,
) -> Parsed<'a, Expr> {
    map(
        sequence((
            space,
            operand,
            many(sequence((space, operator, space, operand))),
            space,
        )),
        |(_, first, rest, _)| {
            rest.into_iter()
                .fold(first, |lhs, (_, op, _, rhs)| Expr::binary(op, lhs, rhs))
        },
    )
    .parse(input)
}

fn left_factor(input: &str) -> Parsed<'_, Expr> {
    factor_of(input, left_expr)
}

fn left_term(input: &str) -> Parsed<'_, Expr> {
    left_chain(input, left_factor, multiplicative)
}

fn left_expr(input: &str) -> Parsed<'_, Expr> {
    left_chain(input, left_term, additive)
}

/// Parser and evaluator for integer arithmetic expressions.
#[derive(Clone, Default, Debug)]
pub struct Calculator {
    config: Config,
}

impl Calculator {
    /// Creates a calculator using the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parses an expression at the start of `input`, leaving any input following it.
    pub fn parse_prefix<'a>(&self, input: &'a str) -> Parsed<'a, Expr> {
        match self.config.associativity {
            Associativity::Right => expr(input),
            Associativity::Left => left_expr(input),
        }
    }

    /// Parses `input`, which must consist of a single expression.
    ///
    /// A number literal that does not fit into an `i64` is a syntax error at the literal, not an
    /// [`Error::Overflow`].
    pub fn parse<'a>(&self, input: &'a str) -> Result<Expr, Error> {
        parse_complete(|input: &'a str| self.parse_prefix(input), input).map_err(Error::from)
    }

    /// Parses and evaluates `input`, which must consist of a single expression.
    pub fn evaluate(&self, input: &str) -> Result<i64, Error> {
        self.parse(input)?.evaluate()
    }
}

#[cfg(test)]
mod tests {
    use lparse::{Failure, Success};

    use super::*;

    fn num(value: i64) -> Expr {
        Expr::Number(value)
    }

    #[test]
    fn factors() {
        assert_eq!(
            factor("42 x"),
            Success {
                value: num(42),
                remaining: " x"
            }
        );
        assert_eq!(
            factor(" ( 1 + 2 ) x"),
            Success {
                value: Expr::binary(BinOp::Add, num(1), num(2)),
                remaining: "x"
            }
        );
        assert_eq!(factor("x"), Failure { remaining: "x" });
    }

    #[test]
    fn right_grouping() {
        assert_eq!(
            expr("10 - 4 - 3").value(),
            Some(Expr::binary(
                BinOp::Sub,
                num(10),
                Expr::binary(BinOp::Sub, num(4), num(3))
            ))
        );
        assert_eq!(
            term("8 / 4 / 2").value(),
            Some(Expr::binary(
                BinOp::Div,
                num(8),
                Expr::binary(BinOp::Div, num(4), num(2))
            ))
        );
    }

    #[test]
    fn left_grouping() {
        assert_eq!(
            left_expr("10 - 4 - 3").value(),
            Some(Expr::binary(
                BinOp::Sub,
                Expr::binary(BinOp::Sub, num(10), num(4)),
                num(3)
            ))
        );
        assert_eq!(
            left_expr("1 + 2 * 3").value(),
            Some(Expr::binary(
                BinOp::Add,
                num(1),
                Expr::binary(BinOp::Mul, num(2), num(3))
            ))
        );
    }

    #[test]
    fn precedence() {
        assert_eq!(
            expr("1 + 2 * 3").value(),
            Some(Expr::binary(
                BinOp::Add,
                num(1),
                Expr::binary(BinOp::Mul, num(2), num(3))
            ))
        );
        assert_eq!(
            expr("(1 + 2) * 3").value(),
            Some(Expr::binary(
                BinOp::Mul,
                Expr::binary(BinOp::Add, num(1), num(2)),
                num(3)
            ))
        );
    }

    #[test]
    fn trailing_input_is_left() {
        let parsed = expr("((5  * 7) + (31 - 9) + 21);finish!");
        assert_eq!(parsed.remaining(), ";finish!");
        assert_eq!(parsed.value().map(|expr| expr.evaluate()), Some(Ok(78)));

        assert_eq!(
            expr("1 +"),
            Success {
                value: num(1),
                remaining: " +"
            }
        );
    }

    #[test]
    fn config() {
        assert_eq!(Config::default().associativity, Associativity::Right);
        assert_eq!(
            Config::default().left_assoc().associativity,
            Associativity::Left
        );
    }
}
