//! Multi-denomination currencies whose values carry upward through fixed exchange factors.
pub mod config;
pub mod currency;
