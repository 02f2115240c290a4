//! Tchisla - find the shortest expressions that build numbers from one digit
//!
//! Given a base digit `D` and a set of target integers, the search builds
//! every value reachable with exactly `i` copies of `D` for `i = 1, 2, 3, ...`
//! and reports, for each target, the first expression that reaches it. The
//! number of copies of `D` in that expression is the fewest needed under the
//! operator set (negation, square root, factorial, `+`, `-`, `*`, `/`, `^`)
//! and the configured unary closure depth.

pub mod expression;
pub mod operator;
pub mod report;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use operator::{BinaryOp, DomainError, UnaryOp};
pub use solver::{Calculation, Solution, Solver, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_targets, validate_base_digit};

/// Find the shortest expression for each target using the default configuration
///
/// # Arguments
///
/// * `digit` - The base digit, 1 to 9
/// * `targets` - Target values; duplicates are reported once
///
/// # Returns
///
/// One [`Solution`] per distinct target, in the order they were discovered.
///
/// # Errors
///
/// This function will return an error if the digit is not in 1..=9.
///
/// The search does not return while a target is unreachable; use
/// [`Solver`] with [`SolverConfig::max_level`] to bound it.
///
/// # Examples
///
/// ```
/// use tchisla::calculate;
///
/// // Build 0 and 1 from fours
/// let solutions = calculate(4, &[0, 1]).unwrap_or_default();
/// for solution in &solutions {
///     println!("{} = {} ({} fours)", solution.target, solution.path, solution.uses);
/// }
/// ```
pub fn calculate(digit: u8, targets: &[i64]) -> Result<Vec<Solution>, SolverError> {
    Ok(calculate_with_store(digit, targets)?.solutions)
}

/// Like [`calculate`], keeping every level built by the search for reporting.
///
/// # Errors
///
/// This function will return an error if the digit is not in 1..=9.
pub fn calculate_with_store(digit: u8, targets: &[i64]) -> Result<Calculation, SolverError> {
    validate_base_digit(digit)?;

    let solver = Solver::new(digit, SolverConfig::default())?;
    solver.calculate(targets)
}
