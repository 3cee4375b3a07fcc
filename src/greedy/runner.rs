//! Greedy construction pass.

use std::cmp::Ordering;

use log::debug;

use crate::problem::{Instance, Solution};

/// Result of the greedy construction.
#[derive(Debug, Clone)]
pub struct GreedyResult {
    /// The constructed solution.
    pub solution: Solution,

    /// Usage-weighted score of the solution, for comparability with the
    /// bee-colony solver.
    pub score: u64,

    /// Sum of selected item values.
    pub total_value: u64,

    /// Sum of selected item weights.
    pub total_weight: u64,
}

/// Executes the single-pass greedy heuristic.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the greedy pass. Deterministic: no randomness, no iteration
    /// parameter, identical inputs always produce identical output.
    pub fn run(instance: &Instance) -> GreedyResult {
        debug!(
            "greedy: items={} capacity={}",
            instance.len(),
            instance.capacity()
        );

        // Stable descending sort by ratio: ratio ties keep catalog order.
        let mut order: Vec<usize> = (0..instance.len()).collect();
        order.sort_by(|&a, &b| {
            let ra = instance.items()[a].ratio();
            let rb = instance.items()[b].ratio();
            rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
        });

        let mut bits = vec![false; instance.len()];
        let mut total_value = 0u64;
        let mut total_weight = 0u64;
        for index in order {
            let item = instance.items()[index];
            if total_weight + item.weight <= instance.capacity() {
                bits[index] = true;
                total_value += item.value;
                total_weight += item.weight;
            }
        }

        let solution = Solution::from_bits(bits);
        let score = instance.usage_weighted(&solution);

        GreedyResult {
            solution,
            score,
            total_value,
            total_weight,
        }
    }
}
