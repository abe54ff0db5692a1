//! Boreas - LLM-elicited branching probabilities for wind power scenario trees
//!
//! Boreas slides a fixed window over a (forecast, actual) power demand time
//! series, asks a text-generation model for a narrative proposing a new
//! 5-branch probability vector for a scenario tree, extracts the vector from
//! the free-form reply with a bounded retry, and aggregates every successful
//! trial into one CSV report.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use boreas::{Dataset, ModelConfig, OpenAiChatClient, PipelineRunner, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model_config = ModelConfig::from_env()?;
//!     let config = RunConfig::default();
//!
//!     let runner = PipelineRunner::new(
//!         OpenAiChatClient::new(model_config.clone()),
//!         OpenAiChatClient::new(model_config),
//!         config,
//!     );
//!
//!     let dataset = Dataset::from_path("wind_and_load.csv")?;
//!     let results = runner.run(&dataset).await?;
//!     let report = results.write_report(runner.config().output_dir())?;
//!     println!("Wrote {}", report.display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `boreas_error` - foundation error types
//! - `boreas_core` - shared data types and run configuration
//! - `boreas_interface` - the `TextGenerator` trait
//! - `boreas_models` - OpenAI-compatible chat-completions client
//! - `boreas_pipeline` - window sampling, narrative generation, extraction,
//!   retry coordination, and aggregation

#![forbid(unsafe_code)]

pub use boreas_core::{
    BASELINE_BRANCH_PROBS, BRANCH_COUNT, GenerateRequest, GenerateResponse, Message, Output,
    ProbabilityVector, QUANTILES, Role, RunConfig, SamplerConfig, ShapeViolation, TrialRecord,
    TrimFallback, Validation,
};
pub use boreas_error::{BoreasError, BoreasErrorKind, BoreasResult};
pub use boreas_interface::TextGenerator;
pub use boreas_models::{ModelConfig, OpenAiChatClient};
pub use boreas_pipeline::{
    Dataset, NarrativeGenerator, ObservationPair, ParseStrategy, PipelineRunner,
    ResultAggregator, RetryCoordinator, TimeSeriesWindow, VectorExtractor, WindowSampler,
    load_run_config, parse_probability_reply,
};
