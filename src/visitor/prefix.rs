use crate::{
    ast::{BinaryOperator, Expr},
    visitor::Visitor,
};

/// Renders an expression tree as fully parenthesized prefix notation.
///
/// Every binary subexpression becomes `(<op> <left> <right>)` with the
/// operator before its operands, so `3 + 4 * 5` renders as
/// `(+ 3 (* 4 5))`. Integral values render without a fractional part.
///
/// # Example
/// ```
/// use minicalc::{parse, visitor::{PrefixNotation, Visitor}};
///
/// let tree = parse("3 + 4 * 5").unwrap();
/// assert_eq!(PrefixNotation.visit(&tree), "(+ 3 (* 4 5))");
/// ```
pub struct PrefixNotation;

impl Visitor for PrefixNotation {
    type Output = String;

    fn visit_number(&mut self, value: f64) -> String {
        format!("{value}")
    }

    fn visit_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> String {
        format!("({op} {} {})", self.visit(left), self.visit(right))
    }
}
