//! ABC execution loop.

use log::{debug, trace};
use rand::Rng;

use super::config::AbcConfig;
use crate::problem::{Instance, Solution};
use crate::random::create_rng;

/// Result of an ABC run.
#[derive(Debug, Clone)]
pub struct AbcResult {
    /// The best solution found.
    pub best: Solution,

    /// Usage-weighted fitness of the best solution.
    pub best_fitness: u64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best fitness after initialization and after each iteration.
    /// Non-decreasing: the best is never overwritten by a worse solution.
    pub fitness_history: Vec<u64>,
}

/// Executes the Artificial Bee Colony search.
pub struct AbcRunner;

impl AbcRunner {
    /// Runs ABC on the given instance.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AbcConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &Instance, config: &AbcConfig) -> AbcResult {
        Self::run_with_observer(instance, config, |_, _| {})
    }

    /// Runs ABC, invoking `observer` after each iteration with the
    /// iteration index (1-based) and the best fitness so far.
    pub fn run_with_observer<F>(instance: &Instance, config: &AbcConfig, mut observer: F) -> AbcResult
    where
        F: FnMut(usize, u64),
    {
        config.validate().expect("invalid AbcConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        debug!(
            "abc: items={} capacity={} bees={} iterations={}",
            instance.len(),
            instance.capacity(),
            config.num_bees,
            config.max_iterations
        );

        let mut population: Vec<Solution> = (0..config.num_bees)
            .map(|_| Solution::random(instance.len(), &mut rng))
            .collect();

        // Best is seeded from member 0, not the population optimum.
        let mut best = population[0].clone();
        let mut best_fitness = instance.usage_weighted(&best);

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(best_fitness);

        let employed = config.num_bees / 2;

        for iteration in 0..config.max_iterations {
            // Employed phase: each employed bee hill-climbs, accepting a
            // neighbor only on strict improvement.
            for i in 0..employed {
                let neighbor = population[i].flip_one(&mut rng);
                if instance.usage_weighted(&neighbor) > instance.usage_weighted(&population[i]) {
                    population[i] = neighbor;
                }
            }

            // Onlooker phase: probabilities are each member's share of the
            // total fitness, computed once per iteration. When every member
            // scores 0 the shares are all 0.0 and roulette selection
            // collapses to index 0.
            let fitnesses: Vec<u64> = population
                .iter()
                .map(|member| instance.usage_weighted(member))
                .collect();
            let total: u64 = fitnesses.iter().sum();
            let probabilities: Vec<f64> = fitnesses
                .iter()
                .map(|&f| if total == 0 { 0.0 } else { f as f64 / total as f64 })
                .collect();

            for i in employed..config.num_bees {
                let source = roulette_select(&probabilities, &mut rng);
                let source_fitness = instance.usage_weighted(&population[source]);
                let neighbor = population[source].flip_one(&mut rng);
                // The comparison is against the selected source, but the
                // winner lands in the onlooker's own slot.
                if instance.usage_weighted(&neighbor) > source_fitness {
                    population[i] = neighbor;
                }
            }

            // Best tracking: strict improvement only.
            for member in &population {
                let f = instance.usage_weighted(member);
                if f > best_fitness {
                    best = member.clone();
                    best_fitness = f;
                }
            }

            fitness_history.push(best_fitness);
            trace!("abc: iteration {} best fitness {}", iteration + 1, best_fitness);
            observer(iteration + 1, best_fitness);
        }

        AbcResult {
            best,
            best_fitness,
            iterations: config.max_iterations,
            fitness_history,
        }
    }
}

/// Roulette-wheel selection: cumulative-sum scan for the first index whose
/// cumulative probability reaches a draw in `[0, total)`.
///
/// With an all-zero probability list the draw is 0 and the very first
/// cumulative sum (0) already satisfies `>=`, so index 0 is returned.
/// The random draw is consumed either way.
fn roulette_select<R: Rng>(probabilities: &[f64], rng: &mut R) -> usize {
    let total: f64 = probabilities.iter().sum();
    let threshold = rng.random::<f64>() * total;

    let mut cumulative = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative >= threshold {
            return i;
        }
    }
    probabilities.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;

    fn small_instance() -> Instance {
        Instance::new(
            vec![
                Item::new(10, 5),
                Item::new(20, 10),
                Item::new(30, 15),
                Item::new(15, 7),
                Item::new(25, 12),
            ],
            30,
        )
        .unwrap()
    }

    #[test]
    fn test_finds_feasible_positive_solution() {
        let config = AbcConfig::default()
            .with_num_bees(30)
            .with_max_iterations(100)
            .with_seed(42);

        let result = AbcRunner::run(&small_instance(), &config);

        // A positive usage-weighted score implies feasibility.
        assert!(result.best_fitness > 0, "expected a feasible positive score");
        assert_eq!(result.best_fitness, small_instance().usage_weighted(&result.best));
        assert_eq!(result.iterations, 100);
    }

    #[test]
    fn test_best_fitness_is_monotonic() {
        let config = AbcConfig::default()
            .with_num_bees(20)
            .with_max_iterations(50)
            .with_seed(7);

        let result = AbcRunner::run(&small_instance(), &config);

        assert_eq!(result.fitness_history.len(), 51);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness must never decrease: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = AbcConfig::default()
            .with_num_bees(16)
            .with_max_iterations(40)
            .with_seed(123);

        let a = AbcRunner::run(&small_instance(), &config);
        let b = AbcRunner::run(&small_instance(), &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_fitness, b.best_fitness);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_zero_iterations_returns_seed_best() {
        let config = AbcConfig::default()
            .with_num_bees(10)
            .with_max_iterations(0)
            .with_seed(5);

        let result = AbcRunner::run(&small_instance(), &config);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        // Best is member 0 of the seeded initial population.
        let mut rng = create_rng(5);
        let member0 = Solution::random(small_instance().len(), &mut rng);
        assert_eq!(result.best, member0);
    }

    #[test]
    fn test_all_infeasible_population_completes() {
        // Every item alone exceeds the capacity, so every nonzero solution
        // is infeasible and the roulette degenerates each iteration.
        let instance =
            Instance::new(vec![Item::new(10, 50), Item::new(20, 60), Item::new(30, 70)], 5)
                .unwrap();
        let config = AbcConfig::default()
            .with_num_bees(8)
            .with_max_iterations(20)
            .with_seed(11);

        let result = AbcRunner::run(&instance, &config);

        assert_eq!(result.best_fitness, 0);
    }

    #[test]
    fn test_observer_sees_every_iteration() {
        let config = AbcConfig::default()
            .with_num_bees(10)
            .with_max_iterations(25)
            .with_seed(1);

        let mut seen = Vec::new();
        let result = AbcRunner::run_with_observer(&small_instance(), &config, |iter, best| {
            seen.push((iter, best));
        });

        assert_eq!(seen.len(), 25);
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[24].0, 25);
        assert_eq!(seen[24].1, result.best_fitness);
    }

    #[test]
    fn test_roulette_degenerate_collapses_to_index_zero() {
        let mut rng = create_rng(42);
        let probabilities = vec![0.0, 0.0, 0.0, 0.0];
        for _ in 0..10 {
            assert_eq!(roulette_select(&probabilities, &mut rng), 0);
        }
    }

    #[test]
    fn test_roulette_certain_pick() {
        let mut rng = create_rng(42);
        let probabilities = vec![0.0, 0.0, 1.0];
        for _ in 0..10 {
            assert_eq!(roulette_select(&probabilities, &mut rng), 2);
        }
    }

    #[test]
    fn test_roulette_respects_weights() {
        let mut rng = create_rng(42);
        let probabilities = vec![0.9, 0.1];
        let picks_of_zero = (0..1000)
            .filter(|_| roulette_select(&probabilities, &mut rng) == 0)
            .count();
        assert!(
            picks_of_zero > 800,
            "expected index 0 to dominate, got {picks_of_zero}/1000"
        );
    }
}
