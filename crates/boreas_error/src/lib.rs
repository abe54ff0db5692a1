//! Error types for the Boreas probability elicitation pipeline.
//!
//! This crate provides the foundation error types used throughout the Boreas
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use boreas_error::{BoreasResult, ConfigError};
//!
//! fn load_settings() -> BoreasResult<String> {
//!     Err(ConfigError::new("missing output directory"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dataset;
mod extraction;
mod models;
mod pipeline;
mod error;

pub use config::ConfigError;
pub use dataset::{DatasetError, DatasetErrorKind};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use error::{BoreasError, BoreasErrorKind, BoreasResult};
