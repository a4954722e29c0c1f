use crate::ast::{BinaryOperator, Expr};

/// Evaluates an expression tree and returns its numeric value.
///
/// Evaluation is a pure, recursive post-order walk: both operands are
/// evaluated first, then combined with the node's operator. Any tree the
/// parser produces evaluates without failure, so there is no error path.
///
/// Division follows IEEE 754 semantics with no explicit zero check, so
/// `1 / 0` yields positive infinity and `0 / 0` yields NaN.
///
/// # Parameters
/// - `expr`: Root of the expression tree to evaluate.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2.0 }),
///                             op:    BinaryOperator::Mul,
///                             right: Box::new(Expr::Literal { value: 3.0 }), };
///
/// assert_eq!(evaluate(&expr), 6.0);
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal { value } => *value,
        Expr::BinaryOp { left, op, right } => {
            let lhs = evaluate(left);
            let rhs = evaluate(right);
            match op {
                BinaryOperator::Add => lhs + rhs,
                BinaryOperator::Sub => lhs - rhs,
                BinaryOperator::Mul => lhs * rhs,
                BinaryOperator::Div => lhs / rhs,
            }
        },
    }
}
