//! Output types from generation responses.

use serde::{Deserialize, Serialize};

/// Supported output types from the text-generation collaborators.
///
/// # Examples
///
/// ```
/// use boreas_core::Output;
///
/// let text = Output::Text("prob_new should shift mass downward".to_string());
/// assert!(text.as_text().is_some());
///
/// let json = Output::Json(serde_json::json!({"prob_new": [0.1, 0.2, 0.4, 0.2, 0.1]}));
/// assert!(json.as_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output.
    Json(serde_json::Value),
}

impl Output {
    /// The text content, if this is a text output.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Json(_) => None,
        }
    }
}
