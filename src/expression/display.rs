use std::fmt;

use crate::expression::ast::Expression;
use crate::utils::repunit_path;

/// Renders the canonical fully parenthesized path, the inverse of
/// [`Expression::parse`].
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal { digit, count } => write!(f, "{}", repunit_path(*digit, *count)),
            Expression::Unary(op, inner) => write!(f, "{}", op.wrap(&inner.to_string())),
            Expression::Binary(op, l, r) => {
                write!(f, "{}", op.join(&l.to_string(), &r.to_string()))
            }
        }
    }
}
