//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boreas - LLM-elicited branching probabilities for wind power scenario trees
#[derive(Parser, Debug)]
#[command(name = "boreas")]
#[command(about = "Elicit scenario-tree branching probabilities from a text-generation model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the elicitation pipeline over a dataset
    Run {
        /// Path to the forecast/actual CSV dataset
        #[arg(long)]
        dataset: PathBuf,

        /// Path to a TOML run configuration (defaults reproduce the
        /// reference run)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the report output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Override the model identifier
        #[arg(long)]
        model: Option<String>,
    },
}
