//! Bunrui Classify — deterministic classification of scanned-document
//! text: normalization, keyword extraction, rule-based category and
//! product scoring, and metadata extraction.
//!
//! Everything here is a pure function over strings. OCR, persistence,
//! and upload handling live outside this crate; it takes the
//! recognized text and hands back plain values. Every public operation
//! is total: internal failures degrade to a documented default instead
//! of reaching the caller.

pub mod category;
pub mod keywords;
pub mod matching;
pub mod metadata;
pub mod normalize;
pub mod product;

pub use category::{classify_category, DocumentCategory};
pub use keywords::{extract_keywords, tokenize, KeywordScore, DEFAULT_MAX_KEYWORDS};
pub use matching::{match_keywords, PRODUCT_CONFIDENCE_THRESHOLD};
pub use metadata::{extract_metadata, ExtractedMetadata};
pub use normalize::normalize;
pub use product::{classify_product_type, ProductType};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The merged classification record for one document. Created per
/// call, immutable after construction; the classifier holds no state
/// between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: DocumentCategory,
    #[serde(rename = "categoryConfidence")]
    pub category_confidence: f64,
    #[serde(rename = "productType", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(rename = "productConfidence")]
    pub product_confidence: i32,
    pub keywords: Vec<KeywordScore>,
    pub metadata: ExtractedMetadata,
}

impl Default for ClassificationResult {
    /// The degraded result: fallback category, no product, nothing
    /// extracted.
    fn default() -> Self {
        Self {
            category: DocumentCategory::Other,
            category_confidence: 0.0,
            product_type: None,
            product_confidence: 0,
            keywords: Vec::new(),
            metadata: ExtractedMetadata::default(),
        }
    }
}

/// Run the full pipeline on raw OCR text with the default keyword cap.
pub fn classify(text: &str) -> ClassificationResult {
    classify_with(text, DEFAULT_MAX_KEYWORDS)
}

/// Run the full pipeline on raw OCR text: normalize once, then score
/// the category, classify the product type, and extract keywords and
/// metadata from the same normalized string.
pub fn classify_with(text: &str, max_keywords: usize) -> ClassificationResult {
    let normalized = normalize(text);

    let (category, category_confidence) = category::classify_category(&normalized);
    let (product_type, product_confidence) = product::classify_product_type(&normalized);
    let keywords = keywords::extract_keywords(&normalized, max_keywords);
    let metadata = metadata::extract_metadata(&normalized);

    debug!(
        category = category.label(),
        category_confidence,
        product = ?product_type,
        "document classified"
    );

    ClassificationResult {
        category,
        category_confidence,
        product_type,
        product_confidence,
        keywords,
        metadata,
    }
}
