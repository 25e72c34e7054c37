//! Arithmetic expression trees.
use crate::Error;

/// A binary arithmetic operator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BinOp {
    /// Addition, `+`.
    Add,
    /// Subtraction, `-`.
    Sub,
    /// Multiplication, `*`.
    Mul,
    /// Integer division truncating towards zero, `/`.
    Div,
}

impl BinOp {
    /// Returns the operator for the character `c`, if there is one.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            _ => return None,
        })
    }

    /// Applies the operator using checked arithmetic.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, Error> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div => {
                if rhs == 0 {
                    return Err(Error::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(Error::Overflow)
    }
}

/// An integer arithmetic expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    /// A number literal.
    Number(i64),
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinOp,
        /// The left operand.
        lhs: Box<Expr>,
        /// The right operand.
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Creates a binary operation node.
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluates the expression.
    ///
    /// Fails on division by zero and when an intermediate result does not fit into an `i64`.
    pub fn evaluate(&self) -> Result<i64, Error> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.evaluate()?, rhs.evaluate()?),
        }
    }
}
