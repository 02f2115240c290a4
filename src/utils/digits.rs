use log::debug;

use crate::utils::errors::UtilsError;

/// Value of `digit` written `count` times, e.g. `repunit(4, 3) == 444`.
///
/// # Errors
///
/// Returns an error if the digit is outside 1..=9, the count is zero, or the
/// number does not fit in an `i64`.
pub fn repunit(digit: u8, count: usize) -> Result<i64, UtilsError> {
    if !(1..=9).contains(&digit) {
        return Err(UtilsError::InvalidDigit(digit));
    }
    if count == 0 {
        return Err(UtilsError::InvalidCount);
    }

    let overflow = UtilsError::Overflow { digit, count };
    let mut value: i64 = 0;
    for _ in 0..count {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or_else(|| overflow.clone())?;
    }

    debug!("Repunit of {} x{} is {}", digit, count, value);
    Ok(value)
}

/// Path text of a repunit: the digit written `count` times.
pub fn repunit_path(digit: u8, count: usize) -> String {
    char::from(b'0' + digit).to_string().repeat(count)
}
