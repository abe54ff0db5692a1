//! Trait definitions for the Boreas text-generation collaborators.
//!
//! Both roles in the pipeline — the narrative generator and the extraction
//! scraper — speak through the same [`TextGenerator`] trait, so any backend
//! (or test double) can stand in for either.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::TextGenerator;
