use std::{env, fs::File};

use bank_account::{
    config::Config, dlq::LogDLQ, engine::Engine, ingestion::CsvReader,
    output_repository::StdOutOutput,
};
use tracing_subscriber::EnvFilter;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(env::args())?;
    let file = File::open(&config.input)?;
    tracing::info!(input = %config.input.display(), "replaying operations");

    let ingestion = CsvReader::new(file)?;
    let output = StdOutOutput::new();
    let dlq = LogDLQ::default();

    // Initialize engine with injected components
    let mut engine = Engine::new(ingestion, output, dlq);

    engine.process().await?;

    engine.flush();

    Ok(())
}
