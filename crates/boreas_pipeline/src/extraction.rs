//! Structured extraction of the probability vector from a narrative.
//!
//! Model replies often wrap the requested JSON in markdown fences or
//! explanatory text. Parsing tries a direct parse first and falls back to
//! stripping a configured number of leading/trailing characters before
//! giving up.

use boreas_core::{GenerateRequest, Message, ProbabilityVector, Role, TrimFallback, Validation};
use boreas_error::{BoreasResult, ExtractionError, ExtractionErrorKind};
use boreas_interface::TextGenerator;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Fixed instruction sent as the system message of every extraction request.
pub const EXTRACTION_PROMPT: &str = "\
You are a scraper. You need to extract the prob_new finally selected from the \
given text. Reply with exactly this JSON shape, with the 5 probabilities \
filled in:
{
  \"prob_new\": []
}";

/// Which parse strategies to attempt on a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Direct parse, then the truncation fallback
    WithFallback,
    /// Direct parse only (used on the retry attempt)
    DirectOnly,
}

/// The fixed reply shape requested from the extraction collaborator.
#[derive(Debug, Deserialize)]
struct ProbReply {
    prob_new: Vec<f64>,
}

fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}

fn parse_direct(
    text: &str,
    validation: Validation,
) -> Result<ProbabilityVector, ExtractionError> {
    let reply: ProbReply = serde_json::from_str(text).map_err(|e| {
        ExtractionError::new(ExtractionErrorKind::Malformed {
            message: e.to_string(),
            preview: preview(text),
        })
    })?;

    ProbabilityVector::new(&reply.prob_new, validation).map_err(ExtractionError::new)
}

/// Parses an extraction reply into a validated probability vector.
///
/// Strategy (a) is a direct JSON parse of the full reply; strategy (b),
/// attempted only under [`ParseStrategy::WithFallback`] and only when (a)
/// failed to parse at all, strips the configured character offsets and
/// re-parses. A reply that parses but violates the probability contract is
/// rejected without trying the fallback, since trimming cannot repair a
/// shape violation.
///
/// # Errors
///
/// Returns [`ExtractionErrorKind::Malformed`] when no strategy parses, or a
/// [`ExtractionErrorKind::Shape`] violation when the parsed vector is
/// invalid.
///
/// # Examples
///
/// ```
/// use boreas_core::{TrimFallback, Validation};
/// use boreas_pipeline::{ParseStrategy, parse_probability_reply};
///
/// let reply = r#"{"prob_new": [0.05, 0.2, 0.5, 0.2, 0.05]}"#;
/// let vector = parse_probability_reply(
///     reply,
///     &TrimFallback::default(),
///     ParseStrategy::WithFallback,
///     Validation::Strict,
/// )
/// .unwrap();
/// assert_eq!(vector.as_slice(), &[0.05, 0.2, 0.5, 0.2, 0.05]);
/// ```
pub fn parse_probability_reply(
    reply: &str,
    trim: &TrimFallback,
    strategy: ParseStrategy,
    validation: Validation,
) -> Result<ProbabilityVector, ExtractionError> {
    match parse_direct(reply, validation) {
        Ok(vector) => Ok(vector),
        Err(err) if err.is_malformed() && strategy == ParseStrategy::WithFallback => {
            debug!("Direct parse failed, applying truncation fallback");
            parse_direct(&trim.apply(reply), validation)
        }
        Err(err) => Err(err),
    }
}

/// Sends a narrative to the extraction collaborator and parses the reply
/// into a validated probability vector.
#[derive(Debug)]
pub struct VectorExtractor<D: TextGenerator> {
    driver: D,
    trim: TrimFallback,
    validation: Validation,
}

impl<D: TextGenerator> VectorExtractor<D> {
    /// Creates an extractor over a text-generation backend.
    pub fn new(driver: D, trim: TrimFallback, validation: Validation) -> Self {
        Self {
            driver,
            trim,
            validation,
        }
    }

    /// Extracts the probability vector from one narrative.
    ///
    /// # Errors
    ///
    /// Propagates backend failures as-is; parse and shape failures surface
    /// as extraction errors for the retry coordinator to act on.
    #[instrument(skip(self, narrative), fields(narrative_length = narrative.len()))]
    pub async fn extract(
        &self,
        narrative: &str,
        strategy: ParseStrategy,
    ) -> BoreasResult<ProbabilityVector> {
        let request = GenerateRequest::new(vec![
            Message::new(Role::System, EXTRACTION_PROMPT.to_string()),
            Message::new(Role::User, narrative.to_string()),
        ]);

        let response = self.driver.generate(&request).await?;
        let reply = response.text();

        match parse_probability_reply(&reply, &self.trim, strategy, self.validation) {
            Ok(vector) => Ok(vector),
            Err(err) => {
                warn!(error = %err, "Failed to extract probability vector");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(reply: &str, strategy: ParseStrategy) -> Result<ProbabilityVector, ExtractionError> {
        parse_probability_reply(reply, &TrimFallback::default(), strategy, Validation::Strict)
    }

    #[test]
    fn direct_parse_returns_vector_unchanged() {
        let vector = parse(
            r#"{"prob_new": [0.05,0.2,0.5,0.2,0.05]}"#,
            ParseStrategy::WithFallback,
        )
        .unwrap();
        assert_eq!(vector.as_slice(), &[0.05, 0.2, 0.5, 0.2, 0.05]);
    }

    #[test]
    fn fallback_recovers_fenced_reply() {
        let fenced = "```json\n{\"prob_new\":[0.1,0.2,0.4,0.2,0.1]}\n```";
        let vector = parse(fenced, ParseStrategy::WithFallback).unwrap();

        let unwrapped = parse(
            r#"{"prob_new":[0.1,0.2,0.4,0.2,0.1]}"#,
            ParseStrategy::WithFallback,
        )
        .unwrap();
        assert_eq!(vector, unwrapped);
    }

    #[test]
    fn direct_only_skips_the_fallback() {
        let fenced = "```json\n{\"prob_new\":[0.1,0.2,0.4,0.2,0.1]}\n```";
        let err = parse(fenced, ParseStrategy::DirectOnly).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn prose_reply_fails_both_strategies() {
        let err = parse(
            "I would suggest shifting mass toward the lower quantiles.",
            ParseStrategy::WithFallback,
        )
        .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = parse(r#"{"probabilities": [0.2]}"#, ParseStrategy::WithFallback).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn wrong_length_is_a_shape_violation() {
        let err = parse(
            r#"{"prob_new": [0.5, 0.5]}"#,
            ParseStrategy::WithFallback,
        )
        .unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::Shape(_)));
    }

    #[test]
    fn negative_entry_is_a_shape_violation() {
        let err = parse(
            r#"{"prob_new": [0.3, -0.1, 0.5, 0.2, 0.1]}"#,
            ParseStrategy::WithFallback,
        )
        .unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::Shape(_)));
    }

    #[test]
    fn strict_rejects_vectors_that_do_not_sum_to_one() {
        let err = parse(
            r#"{"prob_new": [0.1, 0.1, 0.1, 0.1, 0.1]}"#,
            ParseStrategy::WithFallback,
        )
        .unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::Shape(_)));
    }

    #[test]
    fn lenient_accepts_vectors_that_do_not_sum_to_one() {
        let vector = parse_probability_reply(
            r#"{"prob_new": [0.1, 0.1, 0.1, 0.1, 0.1]}"#,
            &TrimFallback::default(),
            ParseStrategy::WithFallback,
            Validation::Lenient,
        )
        .unwrap();
        assert!((vector.sum() - 0.5).abs() < 1e-12);
    }
}
