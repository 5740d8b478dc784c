//! Integration tests for seo-metagen
//!
//! These run the real HTTP provider and file I/O against a local mock
//! completions server and temporary directories.

pub mod pipeline_tests;
