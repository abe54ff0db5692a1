//! Branching probability types for the scenario tree.

use serde::{Deserialize, Serialize};

/// Number of branches in the scenario tree.
pub const BRANCH_COUNT: usize = 5;

/// The quantiles the five branches correspond to.
pub const QUANTILES: [f64; BRANCH_COUNT] = [0.01, 0.1, 0.5, 0.9, 0.99];

/// The analytic branching probabilities of the consuming scenario-tree
/// construction. An elicited vector is expected to differ from this baseline.
pub const BASELINE_BRANCH_PROBS: [f64; BRANCH_COUNT] = [
    0.0555555555555556,
    0.244444444444444,
    0.4,
    0.244444444444444,
    0.0555555555555556,
];

/// Absolute tolerance for the sum-to-one check in strict validation.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// How strictly an extracted vector is validated.
///
/// `Lenient` checks shape only (length, finiteness, non-negativity) and
/// accepts vectors that do not sum to 1, matching the behavior of earlier
/// versions of this pipeline. `Strict` additionally requires the sum to be 1
/// within [`SUM_TOLERANCE`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Require the vector to sum to 1 within tolerance
    #[default]
    #[display("strict")]
    Strict,
    /// Accept any non-negative, finite vector of the right length
    #[display("lenient")]
    Lenient,
}

/// A violation of the probability vector contract.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ShapeViolation {
    /// Wrong number of entries
    #[display("expected {} entries, found {}", expected, found)]
    WrongLength {
        /// Required length
        expected: usize,
        /// Length actually supplied
        found: usize,
    },
    /// An entry is NaN or infinite
    #[display("entry {} is not finite", index)]
    NonFinite {
        /// Index of the offending entry
        index: usize,
    },
    /// An entry is negative
    #[display("entry {} is negative: {}", index, value)]
    Negative {
        /// Index of the offending entry
        index: usize,
        /// The offending value
        value: f64,
    },
    /// Entries do not sum to 1 within tolerance (strict validation only)
    #[display("entries sum to {} (tolerance {})", sum, tolerance)]
    SumMismatch {
        /// The actual sum
        sum: f64,
        /// Absolute tolerance applied
        tolerance: f64,
    },
}

/// A validated 5-branch probability vector.
///
/// Construction fails closed: a `ProbabilityVector` is never partially
/// filled or of the wrong length.
///
/// # Examples
///
/// ```
/// use boreas_core::{ProbabilityVector, Validation};
///
/// let vector = ProbabilityVector::new(&[0.05, 0.2, 0.5, 0.2, 0.05], Validation::Strict)?;
/// assert_eq!(vector.as_slice().len(), 5);
/// assert!((vector.sum() - 1.0).abs() < 1e-12);
///
/// // Wrong length is rejected
/// assert!(ProbabilityVector::new(&[0.5, 0.5], Validation::Strict).is_err());
/// # Ok::<(), boreas_core::ShapeViolation>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityVector([f64; BRANCH_COUNT]);

impl ProbabilityVector {
    /// Validate a slice of values into a probability vector.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeViolation`] if the slice has the wrong length,
    /// contains non-finite or negative entries, or (under
    /// [`Validation::Strict`]) does not sum to 1 within [`SUM_TOLERANCE`].
    pub fn new(values: &[f64], validation: Validation) -> Result<Self, ShapeViolation> {
        if values.len() != BRANCH_COUNT {
            return Err(ShapeViolation::WrongLength {
                expected: BRANCH_COUNT,
                found: values.len(),
            });
        }

        let mut branches = [0.0; BRANCH_COUNT];
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ShapeViolation::NonFinite { index });
            }
            if value < 0.0 {
                return Err(ShapeViolation::Negative { index, value });
            }
            branches[index] = value;
        }

        if validation == Validation::Strict {
            let sum: f64 = branches.iter().sum();
            if (sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(ShapeViolation::SumMismatch {
                    sum,
                    tolerance: SUM_TOLERANCE,
                });
            }
        }

        Ok(Self(branches))
    }

    /// The branch probabilities in quantile order.
    pub fn as_slice(&self) -> &[f64; BRANCH_COUNT] {
        &self.0
    }

    /// Sum of the branch probabilities.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl std::fmt::Display for ProbabilityVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
