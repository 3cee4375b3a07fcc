//! Knapsack parameter-sweep CLI.
//!
//! Runs the selected solver over a grid of agent counts and iteration
//! counts against a built-in set of item catalogs, writes the CSV report,
//! and prints the best-scoring configuration.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use log::info;

use knapsack_metaheur::problem::Item;
use knapsack_metaheur::solver::Algorithm;
use knapsack_metaheur::sweep::{best_record, run_sweep, write_csv, SweepPlan};

#[derive(Debug, Parser)]
#[command(name = "knapsack-sweep", about = "Parameter sweep over knapsack solvers")]
struct Cli {
    /// Algorithm: bee-colony (abc), immune-system (ais) or greedy.
    #[arg(short, long, default_value = "bee-colony")]
    algorithm: Algorithm,

    /// Knapsack capacity for every combination.
    #[arg(long, default_value_t = 59)]
    capacity: u64,

    /// Agent (bee/antibody) counts to sweep.
    #[arg(long, value_delimiter = ',', default_values_t = vec![20, 50, 100, 200])]
    agents: Vec<usize>,

    /// Iteration counts to sweep.
    #[arg(long, value_delimiter = ',', default_values_t = vec![50, 100, 200, 500, 1000])]
    iterations: Vec<usize>,

    /// Base seed for reproducible sweeps.
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path.
    #[arg(short, long, default_value = "knapsack_param_results.csv")]
    output: PathBuf,
}

/// The ten benchmark item combinations swept by default.
fn default_catalogs() -> Vec<Vec<Item>> {
    let raw: Vec<Vec<(u64, u64)>> = vec![
        vec![(10, 5), (20, 10), (30, 15)],
        vec![(15, 7), (25, 12), (35, 17)],
        vec![(12, 6), (22, 11), (32, 16)],
        vec![(50, 25), (60, 30), (70, 35), (80, 40)],
        vec![(100, 50), (200, 100), (300, 150), (400, 200)],
        vec![(5, 2), (8, 3), (12, 6), (18, 9), (25, 12)],
        vec![(30, 15), (45, 20), (60, 25), (75, 30)],
        vec![(10, 4), (25, 8), (40, 12), (55, 16), (70, 20)],
        vec![(5, 1), (10, 2), (20, 5), (50, 10), (100, 15)],
        vec![(25, 7), (40, 15), (60, 22), (80, 30), (100, 40)],
    ];
    raw.into_iter()
        .map(|catalog| {
            catalog
                .into_iter()
                .map(|(value, weight)| Item::new(value, weight))
                .collect()
        })
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();

    let plan = SweepPlan {
        algorithm: cli.algorithm,
        catalogs: default_catalogs(),
        capacity: cli.capacity,
        agent_counts: cli.agents,
        iteration_counts: cli.iterations,
        seed: cli.seed,
    };

    info!(
        "sweeping {} over {} combinations, capacity {}",
        plan.algorithm,
        plan.catalogs.len(),
        plan.capacity
    );
    let records = run_sweep(&plan);

    let file = File::create(&cli.output)
        .wrap_err_with(|| format!("creating {}", cli.output.display()))?;
    write_csv(&records, file).wrap_err("writing CSV report")?;

    if let Some(best) = best_record(&records) {
        println!("Best combination:");
        println!("  Combination:    {}", best.combination);
        println!("  Items:          {}", best.items);
        println!("  Agents:         {}", best.num_agents);
        println!("  Max iterations: {}", best.max_iterations);
        println!("  Best solution:  {}", best.best_solution);
        println!("  Best fitness:   {}", best.best_fitness);
        println!("  Elapsed:        {:.3}s", best.elapsed_secs);
    }
    println!("Results saved to {}", cli.output.display());

    Ok(())
}
