//! Command implementations.

pub mod scenario;

pub use scenario::{run_operation, run_profitable_harvest};
