//! Error type shared by solver construction and solution parsing.

use thiserror::Error;

/// Errors raised before any search begins.
///
/// All variants are construction-time failures: an invalid instance,
/// an invalid parameter, or an unknown algorithm tag. Nothing here is
/// recoverable mid-run — a solver either constructs fully or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The algorithm tag did not match any known solver.
    #[error("unknown algorithm `{0}` (expected bee-colony, immune-system or greedy)")]
    UnknownAlgorithm(String),

    /// The item catalog was empty.
    #[error("catalog must contain at least one item")]
    EmptyCatalog,

    /// The knapsack capacity was zero.
    #[error("capacity must be positive")]
    ZeroCapacity,

    /// An item with zero weight was found at the given catalog index.
    /// Zero weights would break the value/weight ratio and capacity-usage
    /// calculations.
    #[error("item {0} has zero weight")]
    ZeroWeight(usize),

    /// A population/agent/clone count parameter was zero.
    #[error("{0} must be positive")]
    ZeroParameter(&'static str),

    /// A serialized solution contained something other than `0` or `1`.
    #[error("invalid bit `{0}` in solution string")]
    InvalidBit(String),
}
