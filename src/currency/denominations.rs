//! Named denominations of a currency and the values held in each of them.
use std::{fmt, ops::Index};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::currency::{Factor, Normalizer, Order, Value};

/// A single denomination paired with its current value.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holding<'a> {
    /// The name of the denomination.
    pub denomination: &'a str,

    /// The value held in the denomination.
    pub value: Value,
}

impl fmt::Display for Holding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.denomination, self.value)
    }
}

/// A currency split into named denominations, lowest first.
///
/// Every write is normalized right away, so outside of a write the values
/// always satisfy `0 <= values[i] < factor_i` for all but the highest
/// denomination.
#[derive(Debug, Clone)]
pub struct DenominationSet {
    /// The names of the denominations, lowest first.
    names: Vec<String>,

    /// The value held in each denomination, in the same order as `names`.
    values: Vec<Value>,

    /// Carries overflow between denominations. `None` for a single denomination.
    normalizer: Option<Normalizer>,

    /// Set whenever `values` may not be normalized.
    dirty: bool,
}

impl DenominationSet {
    /// Creates a denomination set with every value at zero.
    ///
    /// Pass one factor to use it between every pair of denominations, or one
    /// factor per adjacent pair.
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        factors: &[Factor],
    ) -> Result<Self, CurrencyError> {
        let names = names.into_iter().map(Into::into).collect::<Vec<String>>();
        let normalizer = build_normalizer(&names, factors)?;
        Ok(DenominationSet {
            values: vec![0; names.len()],
            names,
            normalizer,
            dirty: false,
        })
    }

    /// Creates a denomination set holding `values`, normalized right away.
    ///
    /// The set takes ownership of `values`.
    pub fn with_values<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        values: Vec<Value>,
        factors: &[Factor],
    ) -> Result<Self, CurrencyError> {
        let names = names.into_iter().map(Into::into).collect::<Vec<String>>();
        let normalizer = build_normalizer(&names, factors)?;
        if values.len() != names.len() {
            return Err(CurrencyError::ValueCountMismatch {
                expected: names.len(),
                found: values.len(),
            });
        }
        if let Some(&negative) = values.iter().find(|&&value| value < 0) {
            return Err(CurrencyError::NegativeValue(negative));
        }

        let mut set = DenominationSet {
            names,
            values,
            normalizer,
            dirty: true,
        };
        set.normalize()?;
        Ok(set)
    }

    /// Gets the number of denominations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether the set holds no denominations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets the names of the denominations, lowest first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Gets the values of all denominations, lowest first.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Gets the value of the denomination at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }

    /// Replaces the value of the denomination at `index` and normalizes.
    ///
    /// Returns an error if the index is unknown or the value is negative. The
    /// previous value is kept if normalizing would overflow.
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), CurrencyError> {
        if value < 0 {
            return Err(CurrencyError::NegativeValue(value));
        }
        let slot = self
            .values
            .get_mut(index)
            .ok_or(CurrencyError::UnknownDenomination(index))?;
        let previous = std::mem::replace(slot, value);
        self.dirty = true;

        if let Err(err) = self.normalize() {
            self.values[index] = previous;
            self.dirty = false;
            return Err(err);
        }
        Ok(())
    }

    /// Replaces the value of the lowest denomination and normalizes.
    pub fn set_base_value(&mut self, amount: Value) -> Result<(), CurrencyError> {
        self.set(0, amount)
    }

    /// Normalizes the values if they changed since the last normalization.
    ///
    /// Returns whether a carry sweep ran.
    pub fn normalize(&mut self) -> Result<bool, CurrencyError> {
        if !self.dirty {
            return Ok(false);
        }
        let Some(normalizer) = &self.normalizer else {
            self.dirty = false;
            return Ok(false);
        };

        let normalized = normalizer.normalize(&mut self.values)?;
        self.dirty = false;
        debug!(values = ?self.values, normalized, "normalized denominations");
        Ok(normalized)
    }

    /// Gets the whole amount expressed in the lowest denomination.
    ///
    /// Returns `None` if it does not fit in a [`Value`].
    pub fn total(&self) -> Option<Value> {
        match &self.normalizer {
            Some(normalizer) => normalizer.collapse(&self.values),
            None => self.values.first().copied(),
        }
    }

    /// Lists every denomination with its value in the given order.
    pub fn holdings(&self, order: Order) -> Vec<Holding<'_>> {
        let holdings = self
            .names
            .iter()
            .zip(&self.values)
            .map(|(name, &value)| Holding {
                denomination: name.as_str(),
                value,
            });
        match order {
            Order::Ascending => holdings.collect(),
            Order::Descending => holdings.rev().collect(),
        }
    }

    /// Renders every denomination as `name: value`, separated by spaces.
    pub fn render(&self, order: Order) -> String {
        self.holdings(order)
            .iter()
            .map(Holding::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<usize> for DenominationSet {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl fmt::Display for DenominationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Order::Ascending))
    }
}

/// Validates the factors against the denominations they relate.
fn build_normalizer(
    names: &[String],
    factors: &[Factor],
) -> Result<Option<Normalizer>, CurrencyError> {
    if names.is_empty() {
        return Err(CurrencyError::NoDenominations);
    }
    if factors.len() >= names.len() {
        return Err(CurrencyError::TooManyFactors {
            factors: factors.len(),
            denominations: names.len(),
        });
    }
    if names.len() == 1 {
        return Ok(None);
    }

    let pairs = names.len() - 1;
    if factors.len() != 1 && factors.len() != pairs {
        return Err(CurrencyError::FactorCountMismatch {
            expected: pairs,
            found: factors.len(),
        });
    }
    Normalizer::new(factors).map(Some)
}

/// Errors that can occur while building or updating a currency.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("A factor cannot be 0")]
    InvalidFactor,
    #[error("At least one factor is required")]
    NoFactors,
    #[error("Too many factors: {factors} factors for {denominations} denominations")]
    TooManyFactors {
        factors: usize,
        denominations: usize,
    },
    #[error("Expected 1 or {expected} factors, found {found}")]
    FactorCountMismatch { expected: usize, found: usize },
    #[error("At least one denomination is required")]
    NoDenominations,
    #[error("Expected {expected} values, found {found}")]
    ValueCountMismatch { expected: usize, found: usize },
    #[error("Value cannot be negative: {0}")]
    NegativeValue(Value),
    #[error("Unknown denomination index {0}")]
    UnknownDenomination(usize),
    #[error("Operation requires a denomination index")]
    MissingDenomination,
    #[error("Carry into denomination {index} overflows")]
    Overflow { index: usize },
}
