//! Bit-vector solution representation.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::SolverError;

/// A candidate knapsack packing: one bit per catalog item, `true` meaning
/// the item at that index is included.
///
/// The bit-vector length always equals the catalog length. Infeasible
/// (overweight) solutions are representable — they exist transiently in
/// the stochastic populations — but always score 0 under both fitness
/// variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    bits: Vec<bool>,
}

impl Solution {
    /// All-zero solution of the given length. Always feasible.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Draws each bit independently from Bernoulli(0.5).
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Returns a fresh solution with one uniformly chosen bit flipped.
    /// The receiver is left untouched so callers can compare old and new.
    pub fn flip_one<R: Rng>(&self, rng: &mut R) -> Self {
        let mut bits = self.bits.clone();
        let index = rng.random_range(0..bits.len());
        bits[index] = !bits[index];
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Whether the item at `index` is included.
    pub fn is_selected(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Number of included items.
    pub fn selected_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Renders as a comma-separated 0/1 sequence, e.g. `1,0,1`.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .split(',')
            .map(|token| match token.trim() {
                "0" => Ok(false),
                "1" => Ok(true),
                other => Err(SolverError::InvalidBit(other.to_string())),
            })
            .collect::<Result<Vec<bool>, SolverError>>()?;
        Ok(Self { bits })
    }
}
