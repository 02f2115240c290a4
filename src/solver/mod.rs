mod config;
mod core;
mod errors;
mod pairing;
mod store;
mod tracker;

pub use config::{DEFAULT_MAX_CLOSURE_DEPTH, SolverConfig};
pub use core::{Calculation, Solver};
pub use errors::SolverError;
pub use pairing::pairs_for;
pub use store::{Level, ValueStore};
pub use tracker::{Solution, TargetTracker};
