use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Gave up after level {level} with targets outstanding: {remaining:?}")]
    LevelLimitReached { level: usize, remaining: Vec<i64> },
}
