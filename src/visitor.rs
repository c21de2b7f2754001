use crate::ast::{BinaryOperator, Expr};

/// Evaluates an expression tree to a number.
pub mod evaluator;
/// Renders an expression tree in prefix notation.
pub mod prefix;

pub use evaluator::Evaluator;
pub use prefix::PrefixNotation;

/// A generic walker over the closed set of expression node variants.
///
/// Dispatch is resolved by an exhaustive match on the node's variant tag, so
/// an unhandled variant is a compile-time impossibility rather than a
/// runtime failure. A concrete visitor implements one case per variant and
/// produces values of its `Output` type; the provided [`Visitor::visit`]
/// method performs the dispatch.
pub trait Visitor {
    /// The type of value this visitor produces per node.
    type Output;

    /// Handles a numeric literal leaf.
    fn visit_number(&mut self, value: f64) -> Self::Output;

    /// Handles a binary operation node.
    ///
    /// Implementations typically visit `left` and `right` recursively and
    /// combine the results according to `op`.
    fn visit_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> Self::Output;

    /// Dispatches on the node variant.
    fn visit(&mut self, expr: &Expr) -> Self::Output {
        match expr {
            Expr::Number { value } => self.visit_number(*value),
            Expr::BinaryOp { op, left, right } => self.visit_binary_op(*op, left, right),
        }
    }
}
