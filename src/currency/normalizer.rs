//! Carry propagation from the lowest denomination up to the highest.
use std::num::NonZeroU32;

use tracing::{debug, trace};

use crate::currency::{CurrencyError, Factor, Value};

/// Exchange factors between adjacent denominations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factors {
    /// A single factor shared by every adjacent pair.
    Uniform(NonZeroU32),
    /// One factor per adjacent pair, lowest pair first.
    PerPair(Vec<NonZeroU32>),
}

impl Factors {
    /// Gets the factor between denomination `index` and `index + 1`.
    pub fn at(&self, index: usize) -> Option<NonZeroU32> {
        match self {
            Factors::Uniform(factor) => Some(*factor),
            Factors::PerPair(factors) => factors.get(index).copied(),
        }
    }
}

/// Normalizes value sequences so that every denomination but the highest
/// stays below its factor to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    factors: Factors,
}

impl Normalizer {
    /// Creates a normalizer from the given factors.
    ///
    /// A single factor is used for every adjacent pair. Several factors are
    /// applied pairwise, the first one relating denomination 0 and 1.
    /// Returns an error if a factor is zero or no factor is given.
    pub fn new(factors: &[Factor]) -> Result<Self, CurrencyError> {
        let mut factors = factors
            .iter()
            .map(|&factor| NonZeroU32::new(factor).ok_or(CurrencyError::InvalidFactor))
            .collect::<Result<Vec<_>, _>>()?;
        let factors = match factors.len() {
            0 => return Err(CurrencyError::NoFactors),
            1 => Factors::Uniform(factors.remove(0)),
            _ => Factors::PerPair(factors),
        };
        Ok(Normalizer { factors })
    }

    /// Gets the factors this normalizer applies.
    pub fn factors(&self) -> &Factors {
        &self.factors
    }

    /// Gets the factor between denomination `index` and `index + 1`.
    pub fn factor_at(&self, index: usize) -> Option<NonZeroU32> {
        self.factors.at(index)
    }

    /// Carries overflow from the lowest denomination upward in a single sweep.
    ///
    /// Returns `Ok(false)` without touching `values` when every value is zero
    /// or there is only one denomination, and `Ok(true)` once the sweep ran.
    /// Remainders are Euclidean, so a negative value borrows from the next
    /// denomination instead of staying negative. On error `values` is left
    /// unchanged.
    pub fn normalize(&self, values: &mut [Value]) -> Result<bool, CurrencyError> {
        if values.iter().all(|&value| value == 0) {
            return Ok(false);
        }
        if values.len() == 1 {
            return Ok(false);
        }

        let pairs = values.len() - 1;
        let factors: &[NonZeroU32] = match &self.factors {
            Factors::Uniform(factor) => std::slice::from_ref(factor),
            Factors::PerPair(factors) if factors.len() == pairs => factors.as_slice(),
            Factors::PerPair(factors) => {
                return Err(CurrencyError::FactorCountMismatch {
                    expected: pairs,
                    found: factors.len(),
                });
            }
        };

        let mut swept = values.to_vec();
        // A uniform factor repeats for every pair.
        for (index, factor) in factors.iter().cycle().take(pairs).enumerate() {
            let factor = Value::from(factor.get());
            let amount = swept[index];
            let carry = amount.div_euclid(factor);
            swept[index] = amount.rem_euclid(factor);
            swept[index + 1] = swept[index + 1]
                .checked_add(carry)
                .ok_or(CurrencyError::Overflow { index: index + 1 })?;
            trace!(index, carry, "carried into next denomination");
        }

        values.copy_from_slice(&swept);
        debug!(denominations = values.len(), "normalized values");
        Ok(true)
    }

    /// Folds a value sequence back into base units.
    ///
    /// Returns `None` if the total does not fit in a [`Value`] or a factor is missing.
    pub fn collapse(&self, values: &[Value]) -> Option<Value> {
        let Some((&highest, lower)) = values.split_last() else {
            return Some(0);
        };
        // Horner form, intermediate totals never exceed the final one for non-negative values.
        lower
            .iter()
            .enumerate()
            .rev()
            .try_fold(highest, |total, (index, &value)| {
                let factor = Value::from(self.factors.at(index)?.get());
                total.checked_mul(factor)?.checked_add(value)
            })
    }
}
