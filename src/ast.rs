/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is the closed set of expression node variants produced by the
/// parser. Every non-leaf node has exactly two children, each exclusively
/// owned by its parent, so the tree is acyclic and freed when the root is
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal leaf.
    Number {
        /// The literal value, in the canonical `f64` domain.
        value: f64,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
