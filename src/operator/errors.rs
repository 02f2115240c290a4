use thiserror::Error;

/// Raised by an operator whose result is undefined for its operands.
///
/// Always recoverable: the search treats it as "this combination yields nothing".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Result is not an integer")]
    NonInteger,
    #[error("Square root of negative number")]
    NegativeRoot,
    #[error("Factorial of negative number")]
    NegativeFactorial,
    #[error("Result does not fit in a 64-bit integer")]
    Overflow,
}
