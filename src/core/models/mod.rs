//! Core data models
//!
//! Product rows flowing through the pipeline and the OpenAI-compatible wire
//! types used to talk to the generation service.

pub mod openai;
pub mod product;

pub use product::{FALLBACK_META_DESCRIPTION, ProductFields, ProductMeta, Record};
