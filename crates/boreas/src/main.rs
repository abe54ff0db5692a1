//! Boreas CLI binary.
//!
//! This binary runs the elicitation pipeline: slide a window over a
//! forecast/actual time series, elicit branching probability vectors from a
//! text-generation model, and write the aggregated trials to a CSV report.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_pipeline};

    // Load .env credentials before anything reads the environment
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run {
            dataset,
            config,
            output_dir,
            model,
        } => {
            run_pipeline(
                &dataset,
                config.as_deref(),
                output_dir.as_deref(),
                model.as_deref(),
            )
            .await?;
        }
    }

    Ok(())
}
