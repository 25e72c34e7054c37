//! Statement trees.
use std::fmt;

/// The operator reported for leaves by [`Statement::operator`].
pub const UNSET_OPERATOR: &str = "?";

/// The value held by a leaf.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Scalar {
    /// A number literal.
    Number(u64),
    /// A name, i.e. a variable or function name.
    Text(String),
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A node of a parsed program.
///
/// Every node is either a leaf holding a [`Scalar`] or an operator applied to an ordered list of
/// operands. The operators produced by the grammar are:
///
/// | operator           | operands                                             |
/// |--------------------|------------------------------------------------------|
/// | `+`, `-`, `*`, `/` | `[lhs, rhs]`                                         |
/// | `=`                | `[name, value]`                                      |
/// | `call`             | `[name, args...]`                                    |
/// | `if`               | `[condition, block]` or `[condition, block, else]`   |
/// | `block`            | the statements of the block                          |
/// | `fn`               | `[name, params, block]`                              |
/// | `params`           | the parameter names                                  |
///
/// Names are leaves holding [`Scalar::Text`], the `else` branch of an `if` is either a `block` or
/// another `if`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Statement {
    /// A number or a name.
    Leaf(Scalar),
    /// An operator node.
    Operator {
        /// Name of the operator.
        operator: String,
        /// The operands, owned by this node.
        operands: Vec<Statement>,
    },
}

impl Statement {
    /// Creates a leaf.
    pub fn leaf(value: impl Into<Scalar>) -> Self {
        Self::Leaf(value.into())
    }

    /// Creates an operator node.
    pub fn new(operator: impl Into<String>, operands: Vec<Statement>) -> Self {
        Self::Operator {
            operator: operator.into(),
            operands,
        }
    }

    /// Returns the operator of this node, or [`UNSET_OPERATOR`] for a leaf.
    pub fn operator(&self) -> &str {
        match self {
            Self::Leaf(_) => UNSET_OPERATOR,
            Self::Operator { operator, .. } => operator,
        }
    }

    /// Returns the operands of this node, which are empty for a leaf.
    pub fn operands(&self) -> &[Statement] {
        match self {
            Self::Leaf(_) => &[],
            Self::Operator { operands, .. } => operands,
        }
    }

    /// Returns the value of a leaf.
    pub fn leaf_value(&self) -> Option<&Scalar> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Operator { .. } => None,
        }
    }

    /// Returns whether this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

/// A parsed program: a sequence of top-level statements.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves() {
        let leaf = Statement::leaf(42_u64);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.operator(), UNSET_OPERATOR);
        assert!(leaf.operands().is_empty());
        assert_eq!(leaf.leaf_value(), Some(&Scalar::Number(42)));
        assert_eq!(Statement::leaf("x").leaf_value(), Some(&Scalar::from("x")));
    }

    #[test]
    fn operators() {
        let sum = Statement::new("+", vec![Statement::leaf(1_u64), Statement::leaf("y")]);
        assert!(!sum.is_leaf());
        assert_eq!(sum.operator(), "+");
        assert_eq!(sum.operands().len(), 2);
        assert_eq!(sum.leaf_value(), None);
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::Number(1789).to_string(), "1789");
        assert_eq!(Scalar::from(String::from("abc")).to_string(), "abc");
    }
}
