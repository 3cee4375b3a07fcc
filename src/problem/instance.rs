//! Item catalog and knapsack instance.

use crate::error::SolverError;
use crate::problem::fitness;
use crate::problem::Solution;

/// A single catalog entry. Items are identified by their position in the
/// catalog; that index is the stable key used by solution bit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Profit gained by packing this item.
    pub value: u64,
    /// Capacity consumed by this item. Always positive.
    pub weight: u64,
}

impl Item {
    pub fn new(value: u64, weight: u64) -> Self {
        Self { value, weight }
    }

    /// Value-to-weight ratio used by the greedy solver's ordering.
    pub fn ratio(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}

/// An immutable knapsack instance: an ordered item catalog plus a
/// capacity. Supplied at solver construction and never mutated.
#[derive(Debug, Clone)]
pub struct Instance {
    items: Vec<Item>,
    capacity: u64,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// Fails fast on an empty catalog, a zero capacity, or any item with
    /// zero weight (which would poison ratio and usage calculations).
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, SolverError> {
        if items.is_empty() {
            return Err(SolverError::EmptyCatalog);
        }
        if capacity == 0 {
            return Err(SolverError::ZeroCapacity);
        }
        if let Some(index) = items.iter().position(|item| item.weight == 0) {
            return Err(SolverError::ZeroWeight(index));
        }
        Ok(Self { items, capacity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of catalog items, i.e. the solution bit-vector length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Capacity-usage-weighted fitness of `solution` (ABC and greedy
    /// scoring). See [`fitness::usage_weighted`].
    pub fn usage_weighted(&self, solution: &Solution) -> u64 {
        fitness::usage_weighted(&self.items, self.capacity, solution)
    }

    /// Raw value-sum fitness of `solution` (AIS scoring). See
    /// [`fitness::raw_value`].
    pub fn raw_value(&self, solution: &Solution) -> u64 {
        fitness::raw_value(&self.items, self.capacity, solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_instance() {
        let instance = Instance::new(vec![Item::new(10, 5), Item::new(20, 10)], 25).unwrap();
        assert_eq!(instance.len(), 2);
        assert_eq!(instance.capacity(), 25);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Instance::new(vec![], 10).unwrap_err(), SolverError::EmptyCatalog);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            Instance::new(vec![Item::new(1, 1)], 0).unwrap_err(),
            SolverError::ZeroCapacity
        );
    }

    #[test]
    fn test_zero_weight_rejected_with_index() {
        assert_eq!(
            Instance::new(vec![Item::new(1, 1), Item::new(5, 0)], 10).unwrap_err(),
            SolverError::ZeroWeight(1)
        );
    }

    #[test]
    fn test_ratio() {
        assert!((Item::new(30, 15).ratio() - 2.0).abs() < 1e-12);
    }
}
