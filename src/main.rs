use std::process::ExitCode;

use coinage::{
    config::{self, Config},
    currency::{CurrencyError, DenominationSet, Operation, Purse},
};
use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// The size of the channel for feeding operations to the purse.
const CHANNEL_SIZE: usize = 100;

/// Errors that end a run of the binary.
#[derive(Error, Debug)]
enum RunError {
    #[error("Invalid denominations: {0}")]
    Currency(#[from] CurrencyError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to join the purse task: {0}")]
    Join(#[from] JoinError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            let program = args.first().map(String::as_str).unwrap_or("coinage");
            eprintln!("{}", config::usage(program));
            return ExitCode::from(2);
        }
    };

    if let Err(err) = run(config).await {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(config: Config) -> Result<(), RunError> {
    let denominations = DenominationSet::new(config.names, &config.factors)?;

    let (sender, receiver) = mpsc::channel::<Operation>(CHANNEL_SIZE);
    let mut purse = Purse::new(denominations, receiver);

    let handle = tokio::spawn(async move {
        purse.run().await;
        purse
    });

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(&config.input)?;

    for operation in reader.deserialize() {
        match operation {
            Ok(operation) => {
                if let Err(err) = sender.send(operation).await {
                    error!("Error sending operation: {err}");
                }
            }
            Err(err) => error!("Skipping malformed record: {err}"),
        }
    }

    drop(sender); // Close the sender so the purse loop ends
    let purse = handle.await?;

    info!("{}", purse.denominations().render(config.order));

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for holding in purse.denominations().holdings(config.order) {
        writer.serialize(holding)?;
    }
    writer.flush()?;
    Ok(())
}
