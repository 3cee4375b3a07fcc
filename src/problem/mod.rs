//! Knapsack problem model: items, instances, bit-vector solutions and
//! the two fitness variants shared by all solvers.

pub mod fitness;
mod instance;
mod solution;

pub use instance::{Instance, Item};
pub use solution::Solution;
