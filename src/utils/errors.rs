use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Base digit must be between 1 and 9: {0}")]
    InvalidDigit(u8),
    #[error("Digit count must be at least 1")]
    InvalidCount,
    #[error("Digit {digit} repeated {count} times does not fit in a 64-bit integer")]
    Overflow { digit: u8, count: usize },
    #[error("Target list cannot be empty")]
    EmptyTargets,
    #[error("Target must be an integer: {0}")]
    InvalidTarget(String),
}
