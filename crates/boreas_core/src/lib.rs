//! Core data types for the Boreas probability elicitation pipeline.
//!
//! This crate provides the foundation data types used across the Boreas
//! workspace: the request/response vocabulary shared by the text-generation
//! collaborators, the probability vector and trial record domain types, and
//! the run configuration family.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod message;
mod output;
mod probability;
mod record;
mod request;
mod role;

pub use config::{RunConfig, RunConfigBuilder, SamplerConfig, SamplerConfigBuilder, TrimFallback};
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use probability::{
    BASELINE_BRANCH_PROBS, BRANCH_COUNT, ProbabilityVector, QUANTILES, SUM_TOLERANCE,
    ShapeViolation, Validation,
};
pub use record::TrialRecord;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
    GenerateResponseBuilder, GenerateResponseBuilderError,
};
pub use role::Role;
