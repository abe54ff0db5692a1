//! Windowed elicitation pipeline for scenario-tree branching probabilities.
//!
//! This crate orchestrates the Boreas pipeline: slide a fixed window over a
//! (forecast, actual) time series, ask a text-generation model for a
//! narrative proposing a new 5-branch probability vector, extract the vector
//! from the free-form reply with a bounded retry, and aggregate every
//! successful trial into one CSV report.
//!
//! # Example
//!
//! ```rust,ignore
//! use boreas_core::RunConfig;
//! use boreas_models::{ModelConfig, OpenAiChatClient};
//! use boreas_pipeline::{Dataset, PipelineRunner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let model_config = ModelConfig::from_env()?;
//! let config = RunConfig::default();
//!
//! let runner = PipelineRunner::new(
//!     OpenAiChatClient::new(model_config.clone()),
//!     OpenAiChatClient::new(model_config),
//!     config,
//! );
//!
//! let dataset = Dataset::from_path("wind_and_load.csv")?;
//! let results = runner.run(&dataset).await?;
//! let report = results.write_report(std::path::Path::new("."))?;
//! println!("Wrote {}", report.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod dataset;
mod extraction;
mod narrative;
mod retry;
mod runner;
mod sampler;
mod settings;

pub use aggregate::ResultAggregator;
pub use dataset::{Dataset, ObservationPair};
pub use extraction::{EXTRACTION_PROMPT, ParseStrategy, VectorExtractor, parse_probability_reply};
pub use narrative::{NarrativeGenerator, TASK_PROMPT, window_message};
pub use retry::RetryCoordinator;
pub use runner::PipelineRunner;
pub use sampler::{TimeSeriesWindow, WindowSampler};
pub use settings::load_run_config;
