//! Parameter-sweep experiment driver.
//!
//! Iterates a (catalog × agent count × iteration count) grid, runs one
//! solver per cell, times each run, and collects one [`SweepRecord`] per
//! cell for the CSV report. This module is the only consumer-facing I/O
//! boundary — the solvers themselves never touch the filesystem.
//!
//! Each cell gets its own solver instance and its own derived seed, so
//! cells are fully independent: a failed cell is logged and skipped
//! without aborting the rest of the sweep.

use std::io;
use std::time::Instant;

use log::{info, warn};
use serde::Serialize;

use crate::problem::{Instance, Item};
use crate::solver::{Algorithm, Solver};

/// The grid to sweep.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    /// Which solver to run on every cell.
    pub algorithm: Algorithm,

    /// Item catalogs, one combination per entry.
    pub catalogs: Vec<Vec<Item>>,

    /// Knapsack capacity shared by all cells.
    pub capacity: u64,

    /// Bee/antibody counts to sweep.
    pub agent_counts: Vec<usize>,

    /// Iteration counts to sweep.
    pub iteration_counts: Vec<usize>,

    /// Base seed. Each cell derives its own seed from this, so cells stay
    /// independent and the whole sweep reproduces. `None` leaves every
    /// run unseeded.
    pub seed: Option<u64>,
}

/// One row of the CSV report. Column names match the report format.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRecord {
    #[serde(rename = "Combination")]
    pub combination: usize,

    #[serde(rename = "Items")]
    pub items: String,

    #[serde(rename = "Number of Agents")]
    pub num_agents: usize,

    #[serde(rename = "Max Iterations")]
    pub max_iterations: usize,

    #[serde(rename = "Best Solution")]
    pub best_solution: String,

    #[serde(rename = "Best Fitness")]
    pub best_fitness: u64,

    #[serde(rename = "Execution Time (s)")]
    pub elapsed_secs: f64,
}

/// Runs the full sweep and returns one record per completed cell.
pub fn run_sweep(plan: &SweepPlan) -> Vec<SweepRecord> {
    let mut records = Vec::new();
    let mut run_index = 0u64;

    for (combination_idx, catalog) in plan.catalogs.iter().enumerate() {
        let combination = combination_idx + 1;
        let instance = match Instance::new(catalog.clone(), plan.capacity) {
            Ok(instance) => instance,
            Err(e) => {
                warn!("skipping combination {combination}: {e}");
                continue;
            }
        };

        for &num_agents in &plan.agent_counts {
            for &max_iterations in &plan.iteration_counts {
                run_index += 1;

                let solver = match Solver::new(
                    plan.algorithm,
                    instance.clone(),
                    num_agents,
                    max_iterations,
                ) {
                    Ok(solver) => solver,
                    Err(e) => {
                        warn!(
                            "skipping combination {combination} \
                             (agents={num_agents}, iterations={max_iterations}): {e}"
                        );
                        continue;
                    }
                };
                let solver = match plan.seed {
                    Some(seed) => solver.with_seed(seed.wrapping_add(run_index)),
                    None => solver,
                };

                let start = Instant::now();
                let result = solver.run();
                let elapsed = start.elapsed();

                info!(
                    "combination {combination} agents={num_agents} \
                     iterations={max_iterations}: fitness {} in {:?}",
                    result.score, elapsed
                );

                records.push(SweepRecord {
                    combination,
                    items: format_items(catalog),
                    num_agents,
                    max_iterations,
                    best_solution: result.solution.to_string(),
                    best_fitness: result.score,
                    elapsed_secs: elapsed.as_secs_f64(),
                });
            }
        }
    }

    records
}

/// Writes the records as CSV, header included.
pub fn write_csv<W: io::Write>(records: &[SweepRecord], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// The record with the highest best fitness, if any.
pub fn best_record(records: &[SweepRecord]) -> Option<&SweepRecord> {
    records.iter().max_by_key(|record| record.best_fitness)
}

fn format_items(catalog: &[Item]) -> String {
    catalog
        .iter()
        .map(|item| format!("({},{})", item.value, item.weight))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_plan(algorithm: Algorithm) -> SweepPlan {
        SweepPlan {
            algorithm,
            catalogs: vec![
                vec![Item::new(10, 5), Item::new(20, 10), Item::new(30, 15)],
                vec![Item::new(5, 2), Item::new(8, 3), Item::new(12, 6)],
            ],
            capacity: 25,
            agent_counts: vec![4, 8],
            iteration_counts: vec![5, 10],
            seed: Some(42),
        }
    }

    #[test]
    fn test_sweep_produces_one_record_per_cell() {
        let records = run_sweep(&tiny_plan(Algorithm::BeeColony));
        // 2 catalogs x 2 agent counts x 2 iteration counts.
        assert_eq!(records.len(), 8);
        assert_eq!(records[0].combination, 1);
        assert_eq!(records[7].combination, 2);
    }

    #[test]
    fn test_sweep_is_reproducible_under_fixed_seed() {
        let plan = tiny_plan(Algorithm::ImmuneSystem);
        let a = run_sweep(&plan);
        let b = run_sweep(&plan);

        let fitness_a: Vec<u64> = a.iter().map(|r| r.best_fitness).collect();
        let fitness_b: Vec<u64> = b.iter().map(|r| r.best_fitness).collect();
        assert_eq!(fitness_a, fitness_b);
    }

    #[test]
    fn test_invalid_combination_is_skipped_not_fatal() {
        let mut plan = tiny_plan(Algorithm::Greedy);
        // Zero-weight item makes the first combination unconstructible.
        plan.catalogs[0] = vec![Item::new(10, 0)];

        let records = run_sweep(&plan);

        assert_eq!(records.len(), 4, "second combination must still run");
        assert!(records.iter().all(|r| r.combination == 2));
    }

    #[test]
    fn test_csv_has_expected_header_and_rows() {
        let records = run_sweep(&tiny_plan(Algorithm::Greedy));
        let mut buffer = Vec::new();
        write_csv(&records, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Combination,Items,Number of Agents,Max Iterations,\
             Best Solution,Best Fitness,Execution Time (s)"
        );
        assert_eq!(lines.count(), records.len());
    }

    #[test]
    fn test_best_record_picks_highest_fitness() {
        let records = run_sweep(&tiny_plan(Algorithm::Greedy));
        let best = best_record(&records).unwrap();
        assert!(records.iter().all(|r| r.best_fitness <= best.best_fitness));
    }

    #[test]
    fn test_best_record_empty_is_none() {
        assert!(best_record(&[]).is_none());
    }

    #[test]
    fn test_greedy_record_matches_reference_scenario() {
        let plan = SweepPlan {
            algorithm: Algorithm::Greedy,
            catalogs: vec![vec![Item::new(10, 5), Item::new(20, 10), Item::new(30, 15)]],
            capacity: 25,
            agent_counts: vec![20],
            iteration_counts: vec![50],
            seed: None,
        };

        let records = run_sweep(&plan);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].best_solution, "1,1,0");
        assert_eq!(records[0].best_fitness, 18);
        assert_eq!(records[0].items, "(10,5) (20,10) (30,15)");
    }
}
