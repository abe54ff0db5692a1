//! Trial record types for the result table.

use crate::ProbabilityVector;
use serde::Serialize;

/// One successful elicitation trial.
///
/// Created once per successful extraction and never mutated. The aggregator
/// appends records in (window ascending, trial ascending) order.
///
/// # Examples
///
/// ```
/// use boreas_core::{ProbabilityVector, TrialRecord, Validation};
///
/// let vector = ProbabilityVector::new(&[0.05, 0.2, 0.5, 0.2, 0.05], Validation::Strict)?;
/// let record = TrialRecord::new(0, "gpt-4o".to_string(), 1, vector);
///
/// assert_eq!(*record.window_index(), 0);
/// assert_eq!(*record.trial_index(), 1);
/// # Ok::<(), boreas_core::ShapeViolation>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, derive_new::new, derive_getters::Getters)]
pub struct TrialRecord {
    /// Index of the window this trial ran against
    window_index: usize,
    /// Identifier of the model that produced the narrative
    model: String,
    /// Trial number within the window, starting at 1
    trial_index: u32,
    /// The extracted branching probabilities
    probabilities: ProbabilityVector,
}
