/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is strictly binary: a node is either a literal leaf or a binary
/// operation that owns exactly two children. It is built once by the parser
/// and never mutated afterwards; the evaluator and the printer only borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal leaf.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value }
    }

    /// Creates a binary node owning both operands.
    ///
    /// # Example
    /// ```
    /// use intcalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::literal(1), BinaryOperator::Add, Expr::literal(2));
    /// assert_eq!(sum.to_string(), "1+2");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Returns the depth of the tree. A single literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, integer division truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
