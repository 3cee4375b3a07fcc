//! AIS execution loop.

use log::{debug, trace};

use super::config::AisConfig;
use crate::problem::{Instance, Solution};
use crate::random::create_rng;

/// Result of an AIS run.
#[derive(Debug, Clone)]
pub struct AisResult {
    /// The best solution found.
    pub best: Solution,

    /// Raw-value fitness of the best solution.
    pub best_fitness: u64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best fitness after initialization and after each iteration.
    /// Non-decreasing.
    pub fitness_history: Vec<u64>,

    /// Population size after the final round. Exceeds the nominal
    /// `population_size` whenever `kept * clones_per_antibody` does.
    pub final_population_size: usize,
}

/// Executes the clonal selection search.
pub struct AisRunner;

impl AisRunner {
    /// Runs AIS on the given instance.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AisConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &Instance, config: &AisConfig) -> AisResult {
        Self::run_with_observer(instance, config, |_, _| {})
    }

    /// Runs AIS, invoking `observer` after each iteration with the
    /// iteration index (1-based) and the best fitness so far.
    pub fn run_with_observer<F>(instance: &Instance, config: &AisConfig, mut observer: F) -> AisResult
    where
        F: FnMut(usize, u64),
    {
        config.validate().expect("invalid AisConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        debug!(
            "ais: items={} capacity={} population={} iterations={} clones={}",
            instance.len(),
            instance.capacity(),
            config.population_size,
            config.max_iterations,
            config.clones_per_antibody
        );

        let mut population: Vec<Solution> = (0..config.population_size)
            .map(|_| Solution::random(instance.len(), &mut rng))
            .collect();

        // Best is seeded from member 0, not the population optimum.
        let mut best = population[0].clone();
        let mut best_fitness = instance.raw_value(&best);

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(best_fitness);

        let kept = config.population_size / 2;

        for iteration in 0..config.max_iterations {
            // Rank antibodies by affinity. The sort is stable, so ties
            // keep their relative order.
            let mut ranked: Vec<(Solution, u64)> = population
                .drain(..)
                .map(|antibody| {
                    let f = instance.raw_value(&antibody);
                    (antibody, f)
                })
                .collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1));

            // Clonal expansion: the kept antibodies are replaced by their
            // mutated clones; the originals do not survive.
            let mut next = Vec::with_capacity(kept * config.clones_per_antibody);
            for (antibody, _) in ranked.iter().take(kept) {
                for _ in 0..config.clones_per_antibody {
                    next.push(antibody.flip_one(&mut rng));
                }
            }

            // Diversity refill tops up to the nominal size. It never
            // truncates: when cloning overshoots, the surplus stays.
            while next.len() < config.population_size {
                next.push(Solution::random(instance.len(), &mut rng));
            }
            population = next;

            // Best tracking: strict improvement only.
            for antibody in &population {
                let f = instance.raw_value(antibody);
                if f > best_fitness {
                    best = antibody.clone();
                    best_fitness = f;
                }
            }

            fitness_history.push(best_fitness);
            trace!("ais: iteration {} best fitness {}", iteration + 1, best_fitness);
            observer(iteration + 1, best_fitness);
        }

        AisResult {
            best,
            best_fitness,
            iterations: config.max_iterations,
            final_population_size: population.len(),
            fitness_history,
        }
    }
}
