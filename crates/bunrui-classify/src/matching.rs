//! Search keyword matching with product-type disambiguation.
//!
//! A search keyword like パワコン names a product, and naive substring
//! search would match any page that merely mentions it — a gateway
//! label listing the power conditioner it pairs with, for instance.
//! Product-bearing keywords therefore match only when the page itself
//! classifies as that product.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::normalize::normalize;
use crate::product::{classify_product_type, ProductType};

/// Minimum product-classification score before the product-type signal
/// is trusted for disambiguation. Taken from the scoring scale
/// (keyword hit = 2, model-number hit = 3): a single model-number hit
/// clears it, a lone free-text keyword does not. Review this value if
/// the weights in [`crate::product`] change.
pub const PRODUCT_CONFIDENCE_THRESHOLD: i32 = 3;

/// Search keywords with a fixed product meaning, keyed by their
/// normalized form. Maintained by hand alongside the rule table in
/// [`crate::product`]: a new product type needs entries in both.
static PRODUCT_KEYWORDS: Lazy<HashMap<String, ProductType>> = Lazy::new(|| {
    let entries = [
        ("ゲートウェイ", ProductType::Gateway),
        ("ゲートウエイ", ProductType::Gateway),
        ("パワーコンディショナ", ProductType::PowerConditioner),
        ("パワコン", ProductType::PowerConditioner),
        ("蓄電池ユニット", ProductType::BatteryUnit),
        ("蓄電池", ProductType::BatteryUnit),
        ("pvユニット", ProductType::PvUnit),
        ("pv", ProductType::PvUnit),
    ];
    entries
        .iter()
        .map(|&(keyword, product)| (normalize(keyword), product))
        .collect()
});

/// Return the subset of `keywords` that match `text`.
///
/// The text is normalized and product-classified once; each keyword
/// goes through the identical normalization pipeline before
/// comparison. Product-bearing keywords match only when the classified
/// type agrees and the score clears
/// [`PRODUCT_CONFIDENCE_THRESHOLD`] — there is no substring fallback
/// below the threshold. Keywords without a product meaning use plain
/// substring containment regardless of the score. Matched keywords
/// keep the caller's original spelling, suitable for display and
/// tagging.
pub fn match_keywords(text: &str, keywords: &[String]) -> Vec<String> {
    let normalized = normalize(text);
    let (product_type, confidence) = classify_product_type(&normalized);
    debug!(
        product = ?product_type,
        confidence,
        "matching {} search keywords",
        keywords.len()
    );

    keywords
        .iter()
        .filter(|keyword| {
            let needle = normalize(keyword);
            if needle.is_empty() {
                return false;
            }
            match PRODUCT_KEYWORDS.get(&needle) {
                Some(&expected) => {
                    confidence >= PRODUCT_CONFIDENCE_THRESHOLD
                        && product_type == Some(expected)
                }
                None => normalized.contains(&needle),
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_product_keyword_matches_classified_page() {
        // Model number pushes the gateway score past the threshold.
        let matched = match_keywords("ゲートウェイ KP-GWBP", &kw(&["ゲートウェイ"]));
        assert_eq!(matched, vec!["ゲートウェイ"]);
    }

    #[test]
    fn test_product_keyword_rejected_on_other_product() {
        // A power-conditioner page whose notes mention the gateway.
        // Substring search would match; the gateway mention vetoes the
        // power-conditioner rule and no product is trusted, so the
        // product-bearing keyword fails.
        let text = "マルチ蓄電パワーコンディショナ KPBP-A (ゲートウェイは別売)";
        let matched = match_keywords(text, &kw(&["ゲートウェイ"]));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_product_keyword_requires_agreeing_type() {
        // The page classifies confidently as a battery unit; a PV
        // search keyword must not match it.
        let matched = match_keywords("蓄電池ユニット KP-BU", &kw(&["pv"]));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_no_substring_fallback_below_threshold() {
        // A lone keyword hit scores 2, below the threshold of 3, so
        // the product-bearing search keyword fails outright.
        let matched = match_keywords("蓄電池", &kw(&["蓄電池"]));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_plain_keyword_ignores_confidence() {
        // 設置前 has no product meaning; it matches by substring even
        // though no product classifies here.
        let matched = match_keywords("設置前の写真", &kw(&["設置前", "設置後"]));
        assert_eq!(matched, vec!["設置前"]);
    }

    #[test]
    fn test_keyword_normalized_before_comparison() {
        // Fullwidth input keyword, dash-variant model number in text.
        let matched = match_keywords("ＰＶユニット KP-PV", &kw(&["ＰＶユニット"]));
        assert_eq!(matched, vec!["ＰＶユニット"]);
    }

    #[test]
    fn test_original_spelling_preserved() {
        let matched = match_keywords("蓄電池ユニット KP-BU", &kw(&["蓄電池ユニット"]));
        assert_eq!(matched, vec!["蓄電池ユニット"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(match_keywords("", &kw(&["ゲートウェイ"])).is_empty());
        assert!(match_keywords("何かの文書", &[]).is_empty());
        assert!(match_keywords("何かの文書", &kw(&["", "  "])).is_empty());
    }
}
