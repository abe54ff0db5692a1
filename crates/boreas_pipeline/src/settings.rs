//! Run configuration loading from TOML files.

use boreas_core::RunConfig;
use boreas_error::{BoreasResult, ConfigError};
use std::path::Path;

/// Loads and validates a [`RunConfig`] from a TOML file.
///
/// Missing keys take their defaults, so an empty file reproduces the
/// reference run.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is invalid, or the
/// configuration fails validation.
///
/// # Example TOML
///
/// ```toml
/// trials_per_window = 10
/// max_retries = 1
/// validation = "strict"
/// output_dir = "reports"
///
/// [sampler]
/// window_length = 20
/// start_offset = 28
/// upper_bound = 100
///
/// [trim]
/// prefix = 8
/// suffix = 4
/// ```
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_run_config<P: AsRef<Path>>(path: P) -> BoreasResult<RunConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(format!("{}: {}", path.display(), e)))?;

    let config: RunConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::new(format!("{}: {}", path.display(), e)))?;

    config.validate().map_err(ConfigError::new)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_reproduces_reference_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "").unwrap();

        let config = load_run_config(file.path()).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "trials_per_window = 3\nvalidation = \"lenient\"\n\n[sampler]\nupper_bound = 60\n"
        )
        .unwrap();

        let config = load_run_config(file.path()).unwrap();
        assert_eq!(*config.trials_per_window(), 3);
        assert_eq!(*config.sampler().upper_bound(), 60);
        assert_eq!(*config.sampler().window_length(), 20);
        assert_eq!(*config.max_retries(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "trials_per_window = 0\n").unwrap();

        assert!(load_run_config(file.path()).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "trails_per_window = 10\n").unwrap();

        assert!(load_run_config(file.path()).is_err());
    }
}
