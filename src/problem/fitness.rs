//! The two fitness variants shared by the solvers.
//!
//! Both variants apply the same hard feasibility penalty — any solution
//! whose selected weight exceeds the capacity scores 0 — but shape the
//! feasible reward differently:
//!
//! - [`usage_weighted`] multiplies the value sum by the fraction of
//!   capacity consumed. Two solutions with equal value but different
//!   weight are distinguished, which pulls neighborhood search toward
//!   the capacity boundary. Used by the bee-colony and greedy solvers.
//! - [`raw_value`] is the unscaled value sum. Used by the immune-system
//!   solver.
//!
//! The two shapes are deliberate and must not be unified: each stochastic
//! solver was tuned against its own variant.

use crate::problem::{Item, Solution};

/// Value and weight totals over the selected items.
fn totals(items: &[Item], solution: &Solution) -> (u64, u64) {
    debug_assert_eq!(items.len(), solution.len());
    let mut value = 0u64;
    let mut weight = 0u64;
    for (i, item) in items.iter().enumerate() {
        if solution.is_selected(i) {
            value += item.value;
            weight += item.weight;
        }
    }
    (value, weight)
}

/// Capacity-usage-weighted fitness: `floor(value * weight / capacity)`,
/// or 0 when the solution is overweight.
///
/// Computed in exact integer arithmetic (u128 intermediate). An empty
/// selection has weight 0 and scores 0, which also keeps a zero capacity
/// from ever reaching the division.
pub fn usage_weighted(items: &[Item], capacity: u64, solution: &Solution) -> u64 {
    let (value, weight) = totals(items, solution);
    if weight > capacity || weight == 0 {
        return 0;
    }
    (value as u128 * weight as u128 / capacity as u128) as u64
}

/// Raw value-sum fitness, or 0 when the solution is overweight.
pub fn raw_value(items: &[Item], capacity: u64, solution: &Solution) -> u64 {
    let (value, weight) = totals(items, solution);
    if weight > capacity {
        return 0;
    }
    value
}
