/// Represents a binary operator.
///
/// Binary operators cover the four arithmetic operations.
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

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` models the structure of a parsed arithmetic expression as a tree.
/// Leaves are numeric literals and internal nodes are binary operations whose
/// operands are owned outright by the node. A tree is built bottom-up by the
/// parser, is immutable once constructed, and is dropped as a unit after
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal value.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}
