//! Core functionality
//!
//! Normalizing input rows, generating descriptions, batching, and the
//! pipeline that ties them together.

pub mod batch;
pub mod generator;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod providers;

pub use batch::{BatchOutcome, BatchRunner};
pub use generator::{DescriptionGenerator, Generated};
pub use pipeline::{Pipeline, RunSummary};
