//! Run configuration for the elicitation pipeline.
//!
//! Every parameter the pipeline consumes is a named configuration value
//! here; the defaults reproduce the reference run (window 20, offset 28,
//! bound 100, 10 trials, one retry).

use crate::Validation;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_window_length() -> usize {
    20
}

fn default_start_offset() -> usize {
    28
}

fn default_upper_bound() -> usize {
    100
}

fn default_trials_per_window() -> u32 {
    10
}

fn default_max_retries() -> u32 {
    1
}

fn default_trim_prefix() -> usize {
    8
}

fn default_trim_suffix() -> usize {
    4
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Window slicing parameters.
///
/// Windows are `dataset[offset .. offset + window_length]` for successive
/// offsets starting at `start_offset`, as long as the window end stays
/// within `upper_bound` and the dataset.
///
/// # Examples
///
/// ```
/// use boreas_core::SamplerConfig;
///
/// let config = SamplerConfig::default();
/// assert_eq!(*config.window_length(), 20);
/// assert_eq!(*config.start_offset(), 28);
/// assert_eq!(*config.upper_bound(), 100);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(deny_unknown_fields)]
pub struct SamplerConfig {
    /// Rows per window.
    #[serde(default = "default_window_length")]
    window_length: usize,

    /// Offset of the first window into the dataset.
    #[serde(default = "default_start_offset")]
    start_offset: usize,

    /// Exclusive bound on window end offsets.
    #[serde(default = "default_upper_bound")]
    upper_bound: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            window_length: default_window_length(),
            start_offset: default_start_offset(),
            upper_bound: default_upper_bound(),
        }
    }
}

impl SamplerConfig {
    /// Creates a new sampler config builder.
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }
}

/// Builder for `SamplerConfig`.
#[derive(Debug, Default)]
pub struct SamplerConfigBuilder {
    window_length: Option<usize>,
    start_offset: Option<usize>,
    upper_bound: Option<usize>,
}

impl SamplerConfigBuilder {
    /// Sets the rows per window.
    pub fn window_length(mut self, value: usize) -> Self {
        self.window_length = Some(value);
        self
    }

    /// Sets the offset of the first window.
    pub fn start_offset(mut self, value: usize) -> Self {
        self.start_offset = Some(value);
        self
    }

    /// Sets the exclusive bound on window end offsets.
    pub fn upper_bound(mut self, value: usize) -> Self {
        self.upper_bound = Some(value);
        self
    }

    /// Builds the `SamplerConfig`.
    pub fn build(self) -> SamplerConfig {
        SamplerConfig {
            window_length: self.window_length.unwrap_or_else(default_window_length),
            start_offset: self.start_offset.unwrap_or_else(default_start_offset),
            upper_bound: self.upper_bound.unwrap_or_else(default_upper_bound),
        }
    }
}

/// Truncation fallback applied when a reply fails the direct JSON parse.
///
/// Strips a fixed number of leading and trailing characters before
/// re-parsing. The defaults (8, 4) come from the reference pipeline, which
/// hardcoded them to shear off code-fence-like wrapping without deriving
/// them from the wrapper actually observed; they are configurable because
/// that intent is not recoverable from the reference.
///
/// # Examples
///
/// ```
/// use boreas_core::TrimFallback;
///
/// let trim = TrimFallback::default();
/// assert_eq!(trim.apply("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(deny_unknown_fields)]
pub struct TrimFallback {
    /// Leading characters to strip.
    #[serde(default = "default_trim_prefix")]
    prefix: usize,

    /// Trailing characters to strip.
    #[serde(default = "default_trim_suffix")]
    suffix: usize,
}

impl Default for TrimFallback {
    fn default() -> Self {
        Self {
            prefix: default_trim_prefix(),
            suffix: default_trim_suffix(),
        }
    }
}

impl TrimFallback {
    /// Create a fallback with explicit offsets.
    pub fn new(prefix: usize, suffix: usize) -> Self {
        Self { prefix, suffix }
    }

    /// Strip the configured number of characters from each end.
    ///
    /// Offsets count characters, not bytes. A text shorter than
    /// `prefix + suffix` trims to empty.
    pub fn apply(&self, text: &str) -> String {
        let total = text.chars().count();
        if total <= self.prefix + self.suffix {
            return String::new();
        }
        text.chars()
            .skip(self.prefix)
            .take(total - self.prefix - self.suffix)
            .collect()
    }
}

/// Full pipeline configuration.
///
/// # Examples
///
/// ```
/// use boreas_core::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(*config.trials_per_window(), 10);
/// assert_eq!(*config.max_retries(), 1);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Window slicing parameters.
    #[serde(default)]
    sampler: SamplerConfig,

    /// Trials per window.
    #[serde(default = "default_trials_per_window")]
    trials_per_window: u32,

    /// Extraction retries permitted per trial.
    #[serde(default = "default_max_retries")]
    max_retries: u32,

    /// Truncation fallback offsets.
    #[serde(default)]
    trim: TrimFallback,

    /// Probability vector validation mode.
    #[serde(default)]
    validation: Validation,

    /// Directory the report is written to.
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sampler: SamplerConfig::default(),
            trials_per_window: default_trials_per_window(),
            max_retries: default_max_retries(),
            trim: TrimFallback::default(),
            validation: Validation::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl RunConfig {
    /// Creates a new run config builder.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Overrides the report output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Validates that the configuration describes a runnable pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the window length is zero or no trials are
    /// requested. A sampler range that produces zero windows is valid.
    pub fn validate(&self) -> Result<(), String> {
        if *self.sampler.window_length() == 0 {
            return Err("window_length must be nonzero".to_string());
        }
        if self.trials_per_window == 0 {
            return Err("trials_per_window must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Builder for `RunConfig`.
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    sampler: Option<SamplerConfig>,
    trials_per_window: Option<u32>,
    max_retries: Option<u32>,
    trim: Option<TrimFallback>,
    validation: Option<Validation>,
    output_dir: Option<PathBuf>,
}

impl RunConfigBuilder {
    /// Sets the window slicing parameters.
    pub fn sampler(mut self, value: SamplerConfig) -> Self {
        self.sampler = Some(value);
        self
    }

    /// Sets the trials per window.
    pub fn trials_per_window(mut self, value: u32) -> Self {
        self.trials_per_window = Some(value);
        self
    }

    /// Sets the permitted extraction retries per trial.
    pub fn max_retries(mut self, value: u32) -> Self {
        self.max_retries = Some(value);
        self
    }

    /// Sets the truncation fallback offsets.
    pub fn trim(mut self, value: TrimFallback) -> Self {
        self.trim = Some(value);
        self
    }

    /// Sets the validation mode.
    pub fn validation(mut self, value: Validation) -> Self {
        self.validation = Some(value);
        self
    }

    /// Sets the report output directory.
    pub fn output_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(value.into());
        self
    }

    /// Builds the `RunConfig`.
    pub fn build(self) -> RunConfig {
        RunConfig {
            sampler: self.sampler.unwrap_or_default(),
            trials_per_window: self
                .trials_per_window
                .unwrap_or_else(default_trials_per_window),
            max_retries: self.max_retries.unwrap_or_else(default_max_retries),
            trim: self.trim.unwrap_or_default(),
            validation: self.validation.unwrap_or_default(),
            output_dir: self.output_dir.unwrap_or_else(default_output_dir),
        }
    }
}
