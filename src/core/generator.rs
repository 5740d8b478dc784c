//! Meta description generation for a single product row
//!
//! Every call yields exactly one [`ProductMeta`]. Failures of the generation
//! service are logged and replaced by a fallback row that echoes the inputs.

use crate::core::models::openai::JsonSchemaFormat;
use crate::core::models::{ProductFields, ProductMeta};
use crate::core::providers::StructuredCompletion;
use crate::utils::error::{MetagenError, Result};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name of the structured-output schema sent with each request
pub const SCHEMA_NAME: &str = "product_meta";

/// JSON schema every model answer must follow
pub fn product_meta_schema() -> JsonSchemaFormat {
    JsonSchemaFormat {
        name: SCHEMA_NAME.to_string(),
        strict: true,
        schema: json!({
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "product_title": { "type": "string" },
                "product_description": { "type": "string" },
                "product_type": { "type": "string" },
                "meta_description": { "type": "string" }
            },
            "required": [
                "id",
                "product_title",
                "product_description",
                "product_type",
                "meta_description"
            ],
            "additionalProperties": false
        }),
    }
}

/// Render the user prompt for one product
pub fn build_prompt(fields: &ProductFields) -> String {
    format!(
        "You are an SEO copywriter for an online store. Write a meta description \
for the product below.\n\
\n\
Requirements:\n\
- Between 150 and 160 characters.\n\
- Mention the product name.\n\
- Highlight one key benefit.\n\
- End with a call to action.\n\
\n\
Return the product's id, title, description and type unchanged, together \
with the meta description.\n\
\n\
Product ID: {id}\n\
Product Title: {title}\n\
Product Description: {body}\n\
Product Type: {product_type}",
        id = fields.id,
        title = fields.title,
        body = fields.body,
        product_type = fields.product_type,
    )
}

/// Result of generating one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// The model's answer, as returned
    Model(ProductMeta),
    /// Inputs echoed back with the fallback meta description
    Fallback(ProductMeta),
}

impl Generated {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Generated::Fallback(_))
    }

    pub fn into_meta(self) -> ProductMeta {
        match self {
            Generated::Model(meta) | Generated::Fallback(meta) => meta,
        }
    }
}

/// Generates meta descriptions through a structured completion provider
#[derive(Clone)]
pub struct DescriptionGenerator {
    provider: Arc<dyn StructuredCompletion>,
    schema: JsonSchemaFormat,
}

impl DescriptionGenerator {
    pub fn new(provider: Arc<dyn StructuredCompletion>) -> Self {
        Self {
            provider,
            schema: product_meta_schema(),
        }
    }

    /// Generate the enriched row for `fields`. Never fails.
    pub async fn generate(&self, fields: &ProductFields) -> Generated {
        match self.try_generate(fields).await {
            Ok(meta) => {
                debug!(product_id = %fields.id, "Generated meta description");
                Generated::Model(meta)
            }
            Err(e) => {
                warn!(
                    product_id = %fields.id,
                    error = %e,
                    "Meta description generation failed, using fallback"
                );
                Generated::Fallback(ProductMeta::fallback(fields))
            }
        }
    }

    async fn try_generate(&self, fields: &ProductFields) -> Result<ProductMeta> {
        let prompt = build_prompt(fields);
        let value = self
            .provider
            .complete_structured(&prompt, &self.schema)
            .await?;

        serde_json::from_value(value).map_err(|e| {
            MetagenError::parsing(format!("response does not match {}: {}", SCHEMA_NAME, e))
        })
    }
}
