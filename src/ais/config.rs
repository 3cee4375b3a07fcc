//! AIS configuration.

use crate::error::SolverError;

/// Configuration for the Artificial Immune System solver.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::ais::AisConfig;
///
/// let config = AisConfig::default()
///     .with_population_size(40)
///     .with_max_iterations(200)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AisConfig {
    /// Nominal antibody count. Each round keeps the top
    /// `population_size / 2` antibodies (integer division) for cloning.
    /// The actual population may exceed this after clonal expansion.
    pub population_size: usize,

    /// Number of iterations. 0 returns the seed population's best
    /// immediately.
    pub max_iterations: usize,

    /// Clones produced per kept antibody. A fixed hyperparameter, not
    /// derived from fitness rank.
    pub clones_per_antibody: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AisConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_iterations: 100,
            clones_per_antibody: 5,
            seed: None,
        }
    }
}

impl AisConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_clones_per_antibody(mut self, n: usize) -> Self {
        self.clones_per_antibody = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.population_size == 0 {
            return Err(SolverError::ZeroParameter("population_size"));
        }
        if self.clones_per_antibody == 0 {
            return Err(SolverError::ZeroParameter("clones_per_antibody"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AisConfig::default();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.clones_per_antibody, 5);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = AisConfig::default().with_population_size(0);
        assert_eq!(
            config.validate().unwrap_err(),
            SolverError::ZeroParameter("population_size")
        );
    }

    #[test]
    fn test_validate_zero_clones() {
        let config = AisConfig::default().with_clones_per_antibody(0);
        assert_eq!(
            config.validate().unwrap_err(),
            SolverError::ZeroParameter("clones_per_antibody")
        );
    }
}
