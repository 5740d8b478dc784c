//! Utility modules
//!
//! - **error**: crate error type and result alias
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
