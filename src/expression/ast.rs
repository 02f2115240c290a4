use crate::operator::{BinaryOp, UnaryOp};

/// A parsed expression path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// The base digit written `count` times.
    Literal { digit: u8, count: usize },
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Number of digit occurrences in the expression.
    pub fn uses(&self) -> usize {
        match self {
            Expression::Literal { count, .. } => *count,
            Expression::Unary(_, inner) => inner.uses(),
            Expression::Binary(_, l, r) => l.uses() + r.uses(),
        }
    }

    /// Longest chain of directly nested unary operators anywhere in the tree.
    pub fn max_unary_run(&self) -> usize {
        match self {
            Expression::Literal { .. } => 0,
            Expression::Unary(_, inner) => self.unary_chain().max(inner.max_unary_run()),
            Expression::Binary(_, l, r) => l.max_unary_run().max(r.max_unary_run()),
        }
    }

    fn unary_chain(&self) -> usize {
        match self {
            Expression::Unary(_, inner) => 1 + inner.unary_chain(),
            _ => 0,
        }
    }
}
