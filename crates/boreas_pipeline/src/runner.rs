//! Sequential orchestration of windows and trials.

use crate::{
    Dataset, NarrativeGenerator, ResultAggregator, RetryCoordinator, VectorExtractor,
    WindowSampler,
};
use boreas_core::RunConfig;
use boreas_error::BoreasResult;
use boreas_interface::TextGenerator;
use tracing::{debug, info, instrument, warn};

/// Runs the full elicitation pipeline over a dataset.
///
/// Strictly sequential: one window at a time, trials 1..=N in order within
/// each window, one blocking round trip at a time. The first fatal error
/// aborts the run with nothing persisted.
#[derive(Debug)]
pub struct PipelineRunner<G: TextGenerator, E: TextGenerator> {
    generator: NarrativeGenerator<G>,
    extractor: VectorExtractor<E>,
    coordinator: RetryCoordinator,
    config: RunConfig,
    model: String,
}

impl<G: TextGenerator, E: TextGenerator> PipelineRunner<G, E> {
    /// Creates a runner from the two collaborator backends and a config.
    ///
    /// The narrative backend's model identifier names the run and is
    /// stamped on every record.
    pub fn new(narrative_driver: G, extraction_driver: E, config: RunConfig) -> Self {
        let model = narrative_driver.model_name().to_string();
        Self {
            generator: NarrativeGenerator::new(narrative_driver),
            extractor: VectorExtractor::new(
                extraction_driver,
                *config.trim(),
                *config.validation(),
            ),
            coordinator: RetryCoordinator::new(*config.max_retries()),
            config,
            model,
        }
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs every window and trial, returning the populated aggregator.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: an upstream backend failure, or an
    /// extraction that failed past the retry bound. Partial results are
    /// discarded with the error.
    #[instrument(skip(self, dataset), fields(model = %self.model, rows = dataset.len()))]
    pub async fn run(&self, dataset: &Dataset) -> BoreasResult<ResultAggregator> {
        let mut aggregator = ResultAggregator::new(self.model.clone());

        for window in WindowSampler::new(dataset, *self.config.sampler()) {
            info!(window = *window.index(), "Eliciting window");
            for trial in 1..=*self.config.trials_per_window() {
                let vector = self
                    .coordinator
                    .run_trial(&self.generator, &self.extractor, &window)
                    .await?;
                debug!(
                    window = *window.index(),
                    trial,
                    vector = %vector,
                    "Trial complete"
                );
                aggregator.record(*window.index(), trial, vector);
            }
        }

        if aggregator.is_empty() {
            warn!("Sampler produced no windows; the report will be empty");
        }
        Ok(aggregator)
    }
}
