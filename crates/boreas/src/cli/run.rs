//! The `run` command handler.

use boreas_core::RunConfig;
use boreas_models::{ModelConfig, OpenAiChatClient};
use boreas_pipeline::{Dataset, PipelineRunner, load_run_config};
use std::path::Path;
use tracing::info;

/// Runs the elicitation pipeline and writes the report.
///
/// Both collaborators (narrative and extraction) share one credential
/// configuration read from the environment at startup.
pub async fn run_pipeline(
    dataset_path: &Path,
    config_path: Option<&Path>,
    output_dir: Option<&Path>,
    model_override: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => load_run_config(path)?,
        None => RunConfig::default(),
    };
    if let Some(dir) = output_dir {
        config = config.with_output_dir(dir);
    }

    let mut model_config = ModelConfig::from_env()?;
    if let Some(model) = model_override {
        model_config = model_config.with_model(model);
    }

    let dataset = Dataset::from_path(dataset_path)?;
    info!(
        rows = dataset.len(),
        model = %model_config.model(),
        "Starting elicitation run"
    );

    let runner = PipelineRunner::new(
        OpenAiChatClient::new(model_config.clone()),
        OpenAiChatClient::new(model_config),
        config,
    );

    let results = runner.run(&dataset).await?;
    let report = results.write_report(runner.config().output_dir())?;

    info!(
        path = %report.display(),
        rows = results.len(),
        model = results.model(),
        "Elicitation run complete"
    );
    Ok(())
}
