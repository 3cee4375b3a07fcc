//! Artificial Bee Colony (ABC).
//!
//! A population-based metaheuristic with two phases per iteration: the
//! employed phase, where the first half of the colony hill-climbs via
//! single-bit-flip neighbors, and the onlooker phase, where the remaining
//! slots re-sample existing solutions by roulette-wheel selection over
//! their fitness share and keep a mutated neighbor when it beats the
//! selected source.
//!
//! Scores with the capacity-usage-weighted fitness variant.
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization"

mod config;
mod runner;

pub use config::AbcConfig;
pub use runner::{AbcResult, AbcRunner};
