//! Header normalization for input rows
//!
//! Keys are lowercased and every run of whitespace becomes a single `_`.
//! Leading and trailing whitespace is collapsed the same way rather than
//! trimmed, so `" Body_HTML "` becomes `"_body_html_"`. Values are untouched.

use crate::core::models::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| {
        tracing::error!("Failed to compile whitespace regex: {}", e);
        // Never matches
        Regex::new(r"[^\s\S]").unwrap()
    })
});

/// Normalize a single field name
pub fn normalize_key(key: &str) -> String {
    WHITESPACE_RUN.replace_all(&key.to_lowercase(), "_").into_owned()
}

/// Normalize every key of a raw row.
///
/// When two headers normalize to the same key, the last one inserted wins.
pub fn normalize_row<I, K, V>(row: I) -> Record
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let fields: HashMap<String, String> = row
        .into_iter()
        .map(|(key, value)| (normalize_key(key.as_ref()), value.into()))
        .collect();
    Record::new(fields)
}
