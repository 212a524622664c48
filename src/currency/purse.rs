//! The `Purse` owns a denomination set and applies operations to it one at a time.
use tokio::sync::mpsc;
use tracing::error;

use crate::currency::{CurrencyError, DenominationSet, Operation, OperationType};

/// A single owner of a denomination set, fed by a channel of operations.
pub struct Purse {
    /// The denominations held by the purse.
    denominations: DenominationSet,
    /// A channel receiver for incoming operations.
    receiver: mpsc::Receiver<Operation>,
}

impl Purse {
    /// Creates a purse holding the given denominations.
    pub fn new(denominations: DenominationSet, receiver: mpsc::Receiver<Operation>) -> Self {
        Purse {
            denominations,
            receiver,
        }
    }

    /// Gets the denominations held by the purse.
    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Applies a single operation to the denominations.
    pub fn apply(&mut self, operation: Operation) -> Result<(), CurrencyError> {
        match operation.get_type() {
            OperationType::Base => self.denominations.set_base_value(operation.get_amount()),
            OperationType::Set => {
                let index = operation
                    .get_denomination()
                    .ok_or(CurrencyError::MissingDenomination)?;
                self.denominations.set(index, operation.get_amount())
            }
        }
    }

    /// Runs the purse loop until every sender is dropped.
    pub async fn run(&mut self) {
        while let Some(operation) = self.receiver.recv().await {
            if let Err(e) = self.apply(operation) {
                error!("Error applying operation: {e}");
            }
        }
    }
}
