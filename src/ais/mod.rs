//! Artificial Immune System (AIS) — clonal selection.
//!
//! Each round the antibody population is ranked by raw-value fitness,
//! the top half survives, and every survivor spawns a fixed number of
//! single-bit-flip clones. Fresh random antibodies refill the pool when
//! cloning leaves it below the nominal size; when cloning overshoots,
//! the surplus is kept rather than truncated (the over-fill is part of
//! the search dynamics).
//!
//! Scores with the raw value-sum fitness variant.
//!
//! # References
//!
//! - de Castro & Von Zuben (2002), "Learning and Optimization Using the
//!   Clonal Selection Principle"

mod config;
mod runner;

pub use config::AisConfig;
pub use runner::{AisResult, AisRunner};
