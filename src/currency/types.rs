//! Types used throughout the currency system.
use std::{fmt, str::FromStr};

/// Value type, representing an amount held in a single denomination.
pub type Value = i64;

/// Factor type, the count of one denomination that makes up one unit of the next.
pub type Factor = u32;

/// The order in which denominations are listed when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Lowest denomination first.
    #[default]
    Ascending,
    /// Highest denomination first.
    Descending,
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => f.write_str("asc"),
            Order::Descending => f.write_str("desc"),
        }
    }
}
