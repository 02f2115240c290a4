use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error unless the digit is in 1..=9.
pub fn validate_base_digit(digit: u8) -> Result<(), UtilsError> {
    if !(1..=9).contains(&digit) {
        warn!("Base digit out of range: {}", digit);
        return Err(UtilsError::InvalidDigit(digit));
    }
    Ok(())
}

/// Parse a comma separated target list such as `"5,0"`.
///
/// Duplicates are kept here; the search collapses them.
///
/// # Errors
///
/// Returns an error if the list is empty or any entry is not an integer.
pub fn parse_targets(targets: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Parsing target list: '{}'", targets);

    if targets.trim().is_empty() {
        warn!("Target list is empty");
        return Err(UtilsError::EmptyTargets);
    }

    targets
        .split(',')
        .map(str::trim)
        .map(|entry| {
            entry.parse::<i64>().map_err(|_| {
                warn!("Target is not an integer: '{}'", entry);
                UtilsError::InvalidTarget(entry.to_string())
            })
        })
        .collect()
}
