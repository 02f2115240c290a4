//! Expression paths: parsing the canonical path text back into a tree,
//! evaluating it, and measuring it.

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::Expression;
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
