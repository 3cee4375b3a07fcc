//! Greedy ratio-based construction.
//!
//! The deterministic baseline: items are taken in descending value/weight
//! ratio order while they fit, with no backtracking. Not optimal for 0/1
//! knapsack, by design — it exists for head-to-head comparison with the
//! stochastic solvers.

mod runner;

pub use runner::{GreedyResult, GreedyRunner};
