//! Product records
//!
//! A [`Record`] is one normalized input row. [`ProductFields`] is the subset of
//! it the generator needs, and [`ProductMeta`] is the enriched output row.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Meta description used when generation fails for a row
pub const FALLBACK_META_DESCRIPTION: &str = "generation failed";

const ID_KEYS: &[&str] = &["id", "identifier", "product_id", "handle"];
const TITLE_KEYS: &[&str] = &["title", "product_title"];
const BODY_KEYS: &[&str] = &[
    "body_html",
    "body_(html)",
    "body",
    "description",
    "product_description",
];
const TYPE_KEYS: &[&str] = &["type", "product_type", "category"];

/// One input row with normalized field names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Wrap already-normalized fields
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Look up a single field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// First present field among `keys`, or the empty string
    pub fn first_of(&self, keys: &[&str]) -> &str {
        keys.iter().find_map(|key| self.get(key)).unwrap_or("")
    }
}

/// Descriptive fields sent to the generator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    /// Product identifier
    pub id: String,
    /// Product title
    pub title: String,
    /// Body text, often HTML
    pub body: String,
    /// Category or product type
    pub product_type: String,
}

impl From<&Record> for ProductFields {
    fn from(record: &Record) -> Self {
        Self {
            id: record.first_of(ID_KEYS).to_string(),
            title: record.first_of(TITLE_KEYS).to_string(),
            body: record.first_of(BODY_KEYS).to_string(),
            product_type: record.first_of(TYPE_KEYS).to_string(),
        }
    }
}

/// Enriched output row.
///
/// Field names match the structured-output schema requested from the model,
/// and unknown fields are rejected when parsing a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductMeta {
    pub id: String,
    pub product_title: String,
    pub product_description: String,
    pub product_type: String,
    pub meta_description: String,
}

impl ProductMeta {
    /// Echo the inputs with the fallback meta description
    pub fn fallback(fields: &ProductFields) -> Self {
        Self {
            id: fields.id.clone(),
            product_title: fields.title.clone(),
            product_description: fields.body.clone(),
            product_type: fields.product_type.clone(),
            meta_description: FALLBACK_META_DESCRIPTION.to_string(),
        }
    }
}
