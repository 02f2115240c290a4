//! Human readable dumps of a finished search.

mod format;

pub use format::{format_levels, format_solution, format_summary};

#[cfg(test)]
mod tests;
