//! Aggregation of trial results into the probability report.

use boreas_core::{ProbabilityVector, TrialRecord};
use boreas_error::{BoreasResult, PipelineError, PipelineErrorKind};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

const REPORT_HEADER: [&str; 8] = [
    "window",
    "model",
    "trial",
    "prob_new_1",
    "prob_new_2",
    "prob_new_3",
    "prob_new_4",
    "prob_new_5",
];

/// Collects successful trials and writes the report once at the end of a run.
///
/// Records accumulate in arrival order — window ascending, trial ascending
/// within each window — and nothing touches disk until
/// [`Self::write_report`]. An interrupted run therefore produces no output
/// artifact.
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    model: String,
    records: Vec<TrialRecord>,
}

impl ResultAggregator {
    /// Creates an aggregator for the given model identifier.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            records: Vec::new(),
        }
    }

    /// The model identifier stamped on every record.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Appends one successful trial.
    pub fn record(
        &mut self,
        window_index: usize,
        trial_index: u32,
        probabilities: ProbabilityVector,
    ) {
        self.records.push(TrialRecord::new(
            window_index,
            self.model.clone(),
            trial_index,
            probabilities,
        ));
    }

    /// The collected records in arrival order.
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Number of collected records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no trials have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File name of the report, derived from the model identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use boreas_pipeline::ResultAggregator;
    ///
    /// let aggregator = ResultAggregator::new("gpt-4o");
    /// assert_eq!(aggregator.report_filename(), "probs_gpt-4o.csv");
    /// ```
    pub fn report_filename(&self) -> String {
        // model ids may carry path separators (e.g. "org/model")
        format!("probs_{}.csv", self.model.replace(['/', '\\'], "-"))
    }

    /// Writes the full report to `dir`, creating it if needed.
    ///
    /// One row per (window, trial), with the probability vector flattened
    /// into five positional columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    #[instrument(skip(self, dir), fields(rows = self.records.len()))]
    pub fn write_report(&self, dir: &Path) -> BoreasResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| {
            PipelineError::new(PipelineErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let path = dir.join(self.report_filename());
        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| PipelineError::new(PipelineErrorKind::ReportWrite(e.to_string())))?;

        writer
            .write_record(REPORT_HEADER)
            .map_err(|e| PipelineError::new(PipelineErrorKind::ReportWrite(e.to_string())))?;

        for record in &self.records {
            let mut row = vec![
                record.window_index().to_string(),
                record.model().clone(),
                record.trial_index().to_string(),
            ];
            row.extend(record.probabilities().as_slice().iter().map(f64::to_string));
            writer
                .write_record(&row)
                .map_err(|e| PipelineError::new(PipelineErrorKind::ReportWrite(e.to_string())))?;
        }

        writer
            .flush()
            .map_err(|e| PipelineError::new(PipelineErrorKind::ReportWrite(e.to_string())))?;

        info!(path = %path.display(), "Wrote probability report");
        Ok(path)
    }
}
