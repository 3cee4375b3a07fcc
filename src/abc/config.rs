//! ABC configuration.

use crate::error::SolverError;

/// Configuration for the Artificial Bee Colony solver.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::abc::AbcConfig;
///
/// let config = AbcConfig::default()
///     .with_num_bees(50)
///     .with_max_iterations(200)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AbcConfig {
    /// Colony size. The first `num_bees / 2` members act as employed
    /// bees, the remainder as onlookers (integer division, so an odd
    /// colony has one extra onlooker).
    pub num_bees: usize,

    /// Number of iterations. 0 returns the seed population's best
    /// immediately.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            num_bees: 20,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl AbcConfig {
    pub fn with_num_bees(mut self, n: usize) -> Self {
        self.num_bees = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.num_bees == 0 {
            return Err(SolverError::ZeroParameter("num_bees"));
        }
        Ok(())
    }
}
