//! Metaheuristic and greedy solvers for the 0/1 knapsack problem.
//!
//! Provides three interchangeable solvers behind a single [`solver::Solver`]
//! abstraction:
//!
//! - **Artificial Bee Colony (ABC)**: population-based search with an
//!   employed phase (local hill-climbing per bee) and an onlooker phase
//!   (roulette-wheel re-sampling weighted by fitness).
//! - **Artificial Immune System (AIS)**: clonal selection — the fittest
//!   half of the antibody population is cloned and mutated each round,
//!   with random antibodies refilling the remainder.
//! - **Greedy**: deterministic single-pass construction in descending
//!   value/weight ratio order. The non-stochastic baseline.
//!
//! Both stochastic solvers share the same solution representation (a
//! fixed-length bit vector over the item catalog) and mutation operator
//! (single bit flip), but score with different reward shapes: ABC uses a
//! capacity-usage-weighted fitness, AIS uses the raw value sum. See
//! [`problem::fitness`] for the exact contracts.
//!
//! # Architecture
//!
//! The core solvers perform no I/O and draw all randomness from an
//! explicit, per-run seeded generator, so independent runs never share
//! state. The [`sweep`] module is the experiment driver that iterates
//! parameter grids, times each run and serializes a CSV report; it is the
//! only place file output happens.

pub mod abc;
pub mod ais;
pub mod error;
pub mod greedy;
pub mod problem;
pub mod random;
pub mod solver;
pub mod sweep;
