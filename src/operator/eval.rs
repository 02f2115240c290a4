use log::trace;

use crate::operator::ast::{BinaryOp, UnaryOp};
use crate::operator::errors::DomainError;

/// Largest operand whose factorial still fits in an `i64`.
const MAX_FACTORIAL_OPERAND: i64 = 20;

#[inline]
fn exact_sqrt(value: i64) -> Option<i64> {
    let root = value.isqrt();
    (root * root == value).then_some(root)
}

fn factorial(value: i64) -> Result<i64, DomainError> {
    if value < 0 {
        return Err(DomainError::NegativeFactorial);
    }
    if value > MAX_FACTORIAL_OPERAND {
        return Err(DomainError::Overflow);
    }
    Ok((2..=value).product())
}

fn power(base: i64, exponent: i64) -> Result<i64, DomainError> {
    if exponent < 0 {
        return match base {
            0 => Err(DomainError::DivisionByZero),
            1 => Ok(1),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => Err(DomainError::NonInteger),
        };
    }

    let exponent = u32::try_from(exponent).map_err(|_| DomainError::Overflow)?;
    base.checked_pow(exponent).ok_or(DomainError::Overflow)
}

impl UnaryOp {
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the result is undefined, not an integer,
    /// or does not fit in an `i64`.
    pub fn apply(self, value: i64) -> Result<i64, DomainError> {
        let result = match self {
            UnaryOp::Neg => value.checked_neg().ok_or(DomainError::Overflow),
            UnaryOp::Sqrt => {
                if value < 0 {
                    Err(DomainError::NegativeRoot)
                } else {
                    exact_sqrt(value).ok_or(DomainError::NonInteger)
                }
            }
            UnaryOp::Factorial => factorial(value),
        };

        if let Err(e) = &result {
            trace!("{:?}({}) rejected: {}", self, value, e);
        }
        result
    }
}

impl BinaryOp {
    /// # Errors
    ///
    /// Returns a [`DomainError`] for division by zero, inexact division,
    /// negative exponents that do not yield an integer, and overflow.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, DomainError> {
        let result = match self {
            BinaryOp::Add => left.checked_add(right).ok_or(DomainError::Overflow),
            BinaryOp::Sub => left.checked_sub(right).ok_or(DomainError::Overflow),
            BinaryOp::Mul => left.checked_mul(right).ok_or(DomainError::Overflow),
            BinaryOp::Div => {
                if right == 0 {
                    Err(DomainError::DivisionByZero)
                } else if left.checked_rem(right).ok_or(DomainError::Overflow)? != 0 {
                    Err(DomainError::NonInteger)
                } else {
                    left.checked_div(right).ok_or(DomainError::Overflow)
                }
            }
            BinaryOp::Pow => power(left, right),
        };

        if let Err(e) = &result {
            trace!("{} {} {} rejected: {}", left, self.symbol(), right, e);
        }
        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{exact_sqrt, factorial, power};
    use crate::operator::DomainError;

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(exact_sqrt(0), Some(0));
        assert_eq!(exact_sqrt(1), Some(1));
        assert_eq!(exact_sqrt(16), Some(4));
        assert_eq!(exact_sqrt(15), None);
        assert_eq!(exact_sqrt(i64::MAX), None);
    }

    #[test]
    fn test_factorial_bounds() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), Err(DomainError::Overflow));
        assert_eq!(factorial(-1), Err(DomainError::NegativeFactorial));
    }

    #[test]
    fn test_power_negative_exponent() {
        assert_eq!(power(1, -5), Ok(1));
        assert_eq!(power(-1, -3), Ok(-1));
        assert_eq!(power(-1, -4), Ok(1));
        assert_eq!(power(2, -1), Err(DomainError::NonInteger));
        assert_eq!(power(0, -1), Err(DomainError::DivisionByZero));
    }
}
