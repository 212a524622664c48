//! Currency module for denominations, their normalization, and the purse that owns them.
mod denominations;
mod normalizer;
mod operation;
mod purse;
mod types;

pub use denominations::*;
pub use normalizer::*;
pub use operation::*;
pub use purse::*;
pub use types::*;
