//! Bounded retry over the narrative + extraction pair.

use crate::{NarrativeGenerator, ParseStrategy, TimeSeriesWindow, VectorExtractor};
use boreas_core::ProbabilityVector;
use boreas_error::{BoreasErrorKind, BoreasResult, PipelineError, PipelineErrorKind};
use boreas_interface::TextGenerator;
use tracing::{instrument, warn};

/// The two attempt phases of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// Initial narrative, extraction with both parse strategies
    First,
    /// Fresh narrative, direct parse only
    Retry,
}

/// Runs the narrative → extraction pair for one trial, retrying once on
/// extraction failure.
///
/// The retry regenerates the narrative (a fresh independent call) and gives
/// the extraction reply only the direct parse, matching the original
/// recovery path. Backend failures are never retried here; they propagate
/// immediately.
#[derive(Debug, Clone)]
pub struct RetryCoordinator {
    max_retries: u32,
}

impl RetryCoordinator {
    /// Creates a coordinator permitting `max_retries` re-attempts per trial.
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Retries permitted per trial.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Runs one trial to a validated probability vector.
    ///
    /// # Errors
    ///
    /// Propagates backend failures unchanged. Extraction failures are
    /// retried up to the configured bound; exhausting it yields
    /// [`PipelineErrorKind::RetriesExhausted`] carrying the final
    /// extraction error.
    #[instrument(skip_all, fields(window = *window.index()))]
    pub async fn run_trial<G, E>(
        &self,
        generator: &NarrativeGenerator<G>,
        extractor: &VectorExtractor<E>,
        window: &TimeSeriesWindow,
    ) -> BoreasResult<ProbabilityVector>
    where
        G: TextGenerator,
        E: TextGenerator,
    {
        let mut attempt = Attempt::First;
        let mut attempts_made = 0u32;

        loop {
            let narrative = generator.narrate(window).await?;
            let strategy = match attempt {
                Attempt::First => ParseStrategy::WithFallback,
                Attempt::Retry => ParseStrategy::DirectOnly,
            };
            attempts_made += 1;

            match extractor.extract(&narrative, strategy).await {
                Ok(vector) => return Ok(vector),
                Err(err) => match err.kind() {
                    BoreasErrorKind::Extraction(extraction_err) => {
                        if attempts_made > self.max_retries {
                            return Err(PipelineError::new(
                                PipelineErrorKind::RetriesExhausted {
                                    attempts: attempts_made,
                                    last_error: extraction_err.clone(),
                                },
                            )
                            .into());
                        }
                        warn!(
                            attempt = attempts_made,
                            error = %extraction_err,
                            "Extraction failed, regenerating narrative"
                        );
                        attempt = Attempt::Retry;
                    }
                    _ => return Err(err),
                },
            }
        }
    }
}
