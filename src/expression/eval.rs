use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::utils::repunit;

impl Expression {
    /// # Errors
    ///
    /// Returns an error when a literal does not fit in an `i64` or any
    /// operator in the tree signals a domain error.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = match self {
            Expression::Literal { digit, count } => Ok(repunit(*digit, *count)?),
            Expression::Unary(op, inner) => {
                let value = inner.evaluate()?;
                Ok(op.apply(value)?)
            }
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(op.apply(left, right)?)
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }
        result
    }
}
