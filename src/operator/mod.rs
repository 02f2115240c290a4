//! Operator registry: the closed set of unary and binary operators the search
//! applies, in the order it applies them.

mod ast;
mod errors;
mod eval;

pub use ast::{BinaryOp, UnaryOp};
pub use errors::DomainError;
