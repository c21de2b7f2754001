use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    visitor::Visitor,
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to an `f64`.
///
/// Operands combine with standard floating-point arithmetic. A zero divisor
/// is reported as [`RuntimeError::DivisionByZero`] instead of silently
/// producing an infinite or NaN value.
///
/// # Example
/// ```
/// use minicalc::{parse, visitor::{Evaluator, Visitor}};
///
/// let tree = parse("(3 + 4) * 5").unwrap();
/// assert_eq!(Evaluator.visit(&tree).unwrap(), 35.0);
/// ```
pub struct Evaluator;

impl Visitor for Evaluator {
    type Output = EvalResult<f64>;

    fn visit_number(&mut self, value: f64) -> EvalResult<f64> {
        Ok(value)
    }

    fn visit_binary_op(&mut self,
                       op: BinaryOperator,
                       left: &Expr,
                       right: &Expr)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let left = self.visit(left)?;
        let right = self.visit(right)?;

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }
}
