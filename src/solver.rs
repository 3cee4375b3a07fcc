//! Solver selection and the common run contract.
//!
//! [`Solver::new`] is the single construction point: it maps an
//! [`Algorithm`] tag to a fully validated solver variant, failing closed
//! before any search begins. All three variants expose the same
//! `run() -> RunResult` surface; the greedy variant accepts the agent and
//! iteration parameters for interface uniformity but ignores them.

use std::fmt;
use std::str::FromStr;

use crate::abc::{AbcConfig, AbcRunner};
use crate::ais::{AisConfig, AisRunner};
use crate::error::SolverError;
use crate::greedy::GreedyRunner;
use crate::problem::{Instance, Solution};

/// Discrete algorithm tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BeeColony,
    ImmuneSystem,
    Greedy,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::BeeColony => "bee-colony",
            Algorithm::ImmuneSystem => "immune-system",
            Algorithm::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = SolverError;

    /// Accepts the full names, the short forms `abc`/`ais`, and the
    /// original menu digits 1/2/3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bee-colony" | "abc" | "1" => Ok(Algorithm::BeeColony),
            "immune-system" | "ais" | "2" => Ok(Algorithm::ImmuneSystem),
            "greedy" | "3" => Ok(Algorithm::Greedy),
            other => Err(SolverError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// The value crossing the solver/driver boundary: the best solution found
/// and its score under the variant's own fitness shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub solution: Solution,
    pub score: u64,
}

#[derive(Debug, Clone)]
enum Variant {
    BeeColony(AbcConfig),
    ImmuneSystem(AisConfig),
    Greedy,
}

/// A constructed, validated solver bound to one instance.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::problem::{Instance, Item};
/// use knapsack_metaheur::solver::{Algorithm, Solver};
///
/// let instance = Instance::new(
///     vec![Item::new(10, 5), Item::new(20, 10), Item::new(30, 15)],
///     25,
/// )?;
/// let solver = Solver::new(Algorithm::Greedy, instance, 20, 100)?;
/// let result = solver.run();
/// assert_eq!(result.solution.to_string(), "1,1,0");
/// # Ok::<(), knapsack_metaheur::error::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    instance: Instance,
    variant: Variant,
}

impl Solver {
    /// Builds a solver for the given algorithm, validating every
    /// parameter up front. `num_agents` is the bee count or antibody
    /// count; for greedy it is checked but otherwise unused, as is
    /// `max_iterations`.
    pub fn new(
        algorithm: Algorithm,
        instance: Instance,
        num_agents: usize,
        max_iterations: usize,
    ) -> Result<Self, SolverError> {
        if num_agents == 0 {
            return Err(SolverError::ZeroParameter("num_agents"));
        }
        let variant = match algorithm {
            Algorithm::BeeColony => {
                let config = AbcConfig::default()
                    .with_num_bees(num_agents)
                    .with_max_iterations(max_iterations);
                config.validate()?;
                Variant::BeeColony(config)
            }
            Algorithm::ImmuneSystem => {
                let config = AisConfig::default()
                    .with_population_size(num_agents)
                    .with_max_iterations(max_iterations);
                config.validate()?;
                Variant::ImmuneSystem(config)
            }
            Algorithm::Greedy => Variant::Greedy,
        };
        Ok(Self { instance, variant })
    }

    /// Fixes the random seed of a stochastic variant. No effect on greedy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        match &mut self.variant {
            Variant::BeeColony(config) => config.seed = Some(seed),
            Variant::ImmuneSystem(config) => config.seed = Some(seed),
            Variant::Greedy => {}
        }
        self
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Runs the solver to completion and returns the best solution with
    /// its score.
    pub fn run(&self) -> RunResult {
        match &self.variant {
            Variant::BeeColony(config) => {
                let result = AbcRunner::run(&self.instance, config);
                RunResult {
                    solution: result.best,
                    score: result.best_fitness,
                }
            }
            Variant::ImmuneSystem(config) => {
                let result = AisRunner::run(&self.instance, config);
                RunResult {
                    solution: result.best,
                    score: result.best_fitness,
                }
            }
            Variant::Greedy => {
                let result = GreedyRunner::run(&self.instance);
                RunResult {
                    solution: result.solution,
                    score: result.score,
                }
            }
        }
    }
}
