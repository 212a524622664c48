//! Operation module for the writes a purse applies to its denominations.
use serde::Deserialize;

use crate::currency::Value;

/// Enum representing the type of operation.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Replace the value of the lowest denomination.
    Base,
    /// Replace the value of a denomination by index.
    Set,
}

/// Represents a single write, as read from a CSV record.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The type of operation.
    #[serde(rename = "op")]
    op_type: OperationType,

    /// The index of the targeted denomination, if applicable.
    denomination: Option<usize>,

    /// The value to write.
    amount: Value,
}

impl Operation {
    /// Creates an operation replacing the value of the lowest denomination.
    pub fn base(amount: Value) -> Self {
        Operation {
            op_type: OperationType::Base,
            denomination: None,
            amount,
        }
    }

    /// Creates an operation replacing the value of the denomination at `index`.
    pub fn set(index: usize, amount: Value) -> Self {
        Operation {
            op_type: OperationType::Set,
            denomination: Some(index),
            amount,
        }
    }

    /// Gets the type of the operation.
    pub fn get_type(&self) -> OperationType {
        self.op_type
    }

    /// Gets the targeted denomination index, if applicable.
    pub fn get_denomination(&self) -> Option<usize> {
        self.denomination
    }

    /// Gets the amount of the operation.
    pub fn get_amount(&self) -> Value {
        self.amount
    }
}
