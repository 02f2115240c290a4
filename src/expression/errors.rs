use thiserror::Error;

use crate::operator::DomainError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unexpected end of path")]
    UnexpectedEnd,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("Literal mixes different digits: {0}")]
    MixedDigits(String),
    #[error("Trailing input at position {0}")]
    TrailingInput(usize),
    #[error("Operator domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Invalid literal: {0}")]
    Literal(#[from] UtilsError),
}
