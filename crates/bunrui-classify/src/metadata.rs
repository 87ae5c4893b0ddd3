//! Regex-based metadata extraction.
//!
//! Pulls a document date, amount, company name, and project name out
//! of normalized text. Each field is independent and optional: a
//! pattern that does not match leaves its field empty, and a pattern
//! that fails to compile degrades the same way instead of failing the
//! call.

use bunrui_core::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Structured fields extracted from one document. Absence means "not
/// found", never an error. No cross-field validation is performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// First date match, kept as the raw matched substring.
    #[serde(rename = "documentDate", skip_serializing_if = "Option::is_none")]
    pub document_date: Option<String>,
    /// First yen amount, with thousands separators stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Text segment following a legal-entity marker (株式会社 etc.).
    #[serde(rename = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Text segment preceding 事業 or 計画.
    #[serde(rename = "projectName", skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

// Year-month-day with -, / or kanji-era separators: 2024年1月1日, 2024-1-1.
static DATE_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"\d{4}[-/年]\d{1,2}[-/月]\d{1,2}日?"));

// Optional currency symbol, digit groups with separators, 円 unit.
static AMOUNT_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"[¥￥]?\s*([0-9,]+)\s*円"));

// Segment after a company-type marker, optionally parenthesized.
static COMPANY_RE: Lazy<Option<Regex>> =
    Lazy::new(|| compile(r"[（(]?(?:株式|有限|合同)?会社[）)]?\s*([^\s「」（）()]+)"));

// Segment before 事業 or 計画.
static PROJECT_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"([^\s「」（）()]+)(?:事業|計画)"));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("metadata pattern failed to compile, field disabled: {e}");
            None
        }
    }
}

/// Extract metadata from normalized text. Total: any field whose
/// pattern does not apply is left as `None`.
pub fn extract_metadata(normalized: &str) -> ExtractedMetadata {
    let document_date = DATE_RE
        .as_ref()
        .and_then(|re| re.find(normalized))
        .map(|m| m.as_str().to_string());

    let amount = AMOUNT_RE
        .as_ref()
        .and_then(|re| re.captures(normalized))
        .and_then(|cap| cap.get(1))
        .and_then(|m| match parse_amount(m.as_str()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("amount dropped: {e}");
                None
            }
        });

    ExtractedMetadata {
        document_date,
        amount,
        company_name: capture_first(&COMPANY_RE, normalized),
        project_name: capture_first(&PROJECT_RE, normalized),
    }
}

/// Strip thousands separators and parse. An OCR artifact long enough
/// to overflow is an error, caught by the caller and dropped.
fn parse_amount(digits: &str) -> bunrui_core::Result<i64> {
    digits
        .replace(',', "")
        .parse()
        .map_err(|_| Error::Extract(format!("unparsable amount {digits:?}")))
}

fn capture_first(re: &Lazy<Option<Regex>>, text: &str) -> Option<String> {
    re.as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
