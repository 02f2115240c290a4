//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::{repunit, repunit_path};
pub use errors::UtilsError;
pub use validation::{parse_targets, validate_base_digit};
