//! Command-line configuration for the `coinage` binary.
use std::path::PathBuf;

use thiserror::Error;

use crate::currency::{Factor, Order};

/// Denominations used when none are given.
pub const DEFAULT_NAMES: [&str; 3] = ["Copper", "Silver", "Gold"];

/// Factors used when none are given.
pub const DEFAULT_FACTORS: [Factor; 1] = [100];

/// Settings for a single run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The CSV file of operations to apply.
    pub input: PathBuf,
    /// The names of the denominations, lowest first.
    pub names: Vec<String>,
    /// The factors between denominations.
    pub factors: Vec<Factor>,
    /// The order in which holdings are written.
    pub order: Order,
}

impl Config {
    /// Parses `<input_csv_file> [names] [factors] [asc|desc]`.
    ///
    /// `args[0]` is the program name. Lists are comma-separated.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut args = args.iter().skip(1);
        let input = PathBuf::from(args.next().ok_or(ConfigError::MissingInput)?);

        let names: Vec<String> = match args.next() {
            Some(list) => split_list(list).map(str::to_string).collect(),
            None => DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
        };
        let factors: Vec<Factor> = match args.next() {
            Some(list) => split_list(list)
                .map(|factor| {
                    factor
                        .parse::<Factor>()
                        .map_err(|_| ConfigError::InvalidFactor(factor.to_string()))
                })
                .collect::<Result<_, _>>()?,
            None => DEFAULT_FACTORS.to_vec(),
        };
        let order = match args.next() {
            Some(order) => order.parse::<Order>().map_err(ConfigError::InvalidOrder)?,
            None => Order::default(),
        };

        if args.next().is_some() {
            return Err(ConfigError::TooManyArguments);
        }

        Ok(Config {
            input,
            names,
            factors,
            order,
        })
    }
}

/// Gets the usage line for the binary.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} <input_csv_file> [names] [factors] [asc|desc]")
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Errors that can occur while reading the command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing input CSV file")]
    MissingInput,
    #[error("Invalid factor: {0}")]
    InvalidFactor(String),
    #[error("Invalid order: {0}, expected asc or desc")]
    InvalidOrder(String),
    #[error("Too many arguments")]
    TooManyArguments,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{Config, ConfigError, usage};
    use crate::currency::Order;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&args(&["coinage", "ops.csv"])).unwrap();
        assert_eq!(config.input, PathBuf::from("ops.csv"));
        assert_eq!(config.names, ["Copper", "Silver", "Gold"]);
        assert_eq!(config.factors, [100]);
        assert_eq!(config.order, Order::Ascending);
    }

    #[test]
    fn test_all_arguments() {
        let config = Config::from_args(&args(&[
            "coinage",
            "ops.csv",
            "Second, Minute,Hour,Day",
            "60,60,24",
            "desc",
        ]))
        .unwrap();
        assert_eq!(config.names, ["Second", "Minute", "Hour", "Day"]);
        assert_eq!(config.factors, [60, 60, 24]);
        assert_eq!(config.order, Order::Descending);
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(
            Config::from_args(&args(&["coinage"])),
            Err(ConfigError::MissingInput)
        );
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            Config::from_args(&args(&["coinage", "ops.csv", "A,B", "ten"])),
            Err(ConfigError::InvalidFactor("ten".to_string()))
        );
        assert_eq!(
            Config::from_args(&args(&["coinage", "ops.csv", "A,B", "10", "up"])),
            Err(ConfigError::InvalidOrder("up".to_string()))
        );
        assert_eq!(
            Config::from_args(&args(&["coinage", "ops.csv", "A,B", "10", "asc", "x"])),
            Err(ConfigError::TooManyArguments)
        );
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            usage("coinage"),
            "Usage: coinage <input_csv_file> [names] [factors] [asc|desc]"
        );
    }
}
