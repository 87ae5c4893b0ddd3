//! Product type classification for label and manual pages.
//!
//! Pages from storage-battery system manuals mention several products
//! at once (a gateway label warns about the power conditioner, and so
//! on), so each rule carries exclude patterns that veto it outright.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::normalize;

/// Physical product families recognized on label text. Serialized with
/// the camelCase names the surrounding system stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductType {
    Gateway,
    PowerConditioner,
    BatteryUnit,
    PvUnit,
}

/// A model-number hit is worth more than a free-text keyword hit:
/// model numbers rarely appear on pages about another product.
const KEYWORD_WEIGHT: i32 = 2;
const MODEL_PATTERN_WEIGHT: i32 = 3;

struct ProductRule {
    product: ProductType,
    keywords: Vec<String>,
    model_patterns: Vec<String>,
    exclude_patterns: Vec<String>,
}

/// Product rule table, scanned in declaration order (only a strictly
/// higher score replaces the running best, so the first rule to reach
/// the maximum wins ties). All patterns are stored pre-normalized so
/// that dash-bearing katakana matches dash-unified text.
static PRODUCT_RULES: Lazy<Vec<ProductRule>> = Lazy::new(|| {
    fn rule(
        product: ProductType,
        keywords: &[&str],
        model_patterns: &[&str],
        exclude_patterns: &[&str],
    ) -> ProductRule {
        let norm = |patterns: &[&str]| patterns.iter().map(|p| normalize(p)).collect();
        ProductRule {
            product,
            keywords: norm(keywords),
            model_patterns: norm(model_patterns),
            exclude_patterns: norm(exclude_patterns),
        }
    }

    vec![
        rule(
            ProductType::Gateway,
            &["ゲートウェイ", "マルチ蓄電システム用ゲートウェイ", "ゲートウエイ"],
            &["kp-gwbp", "gwbp", "kpgwbp"],
            &["パワーコンディショナ", "パワコン", "kp-bp", "kpbp"],
        ),
        rule(
            ProductType::PowerConditioner,
            &["パワーコンディショナ", "マルチ蓄電パワーコンディショナ", "パワコン"],
            &["kpbp", "kp-bp"],
            &["ゲートウェイ", "ゲートウエイ", "kp-gwbp", "kpgwbp"],
        ),
        rule(
            ProductType::BatteryUnit,
            &["蓄電池ユニット", "蓄電池"],
            &["kp-bu", "kpbu"],
            &[],
        ),
        rule(
            ProductType::PvUnit,
            &["pvユニット", "pv"],
            &["kp-pv", "kppv"],
            &[],
        ),
    ]
});

/// Classify normalized text into a product type with an evidence
/// score. The score is unbounded and not a probability: 2 per distinct
/// keyword plus 3 per distinct model pattern, forced to 0 when any
/// exclude pattern is present. `(None, 0)` when no rule scores.
pub fn classify_product_type(normalized: &str) -> (Option<ProductType>, i32) {
    let mut best: (Option<ProductType>, i32) = (None, 0);
    for rule in PRODUCT_RULES.iter() {
        let score = rule_score(normalized, rule);
        if score > best.1 {
            best = (Some(rule.product), score);
        }
    }

    debug!(product = ?best.0, score = best.1, "product type classified");
    best
}

fn rule_score(text: &str, rule: &ProductRule) -> i32 {
    // Exclusion overrides any positive evidence.
    if rule
        .exclude_patterns
        .iter()
        .any(|p| text.contains(p.as_str()))
    {
        return 0;
    }

    let keyword_hits = rule
        .keywords
        .iter()
        .filter(|k| text.contains(k.as_str()))
        .count() as i32;
    let model_hits = rule
        .model_patterns
        .iter()
        .filter(|m| text.contains(m.as_str()))
        .count() as i32;

    keyword_hits * KEYWORD_WEIGHT + model_hits * MODEL_PATTERN_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_gateway_by_model_number() {
        let text = normalize("マルチ蓄電システム用ゲートウェイ KP-GWBP");
        let (product, score) = classify_product_type(&text);
        assert_eq!(product, Some(ProductType::Gateway));
        // 2 keywords × 2 + 2 model patterns (kp-gwbp, gwbp) × 3.
        assert_eq!(score, 10);
    }

    #[test]
    fn test_power_conditioner() {
        let text = normalize("マルチ蓄電パワーコンディショナ KPBP-A");
        let (product, score) = classify_product_type(&text);
        assert_eq!(product, Some(ProductType::PowerConditioner));
        assert!(score >= 3);
    }

    #[test]
    fn test_exclusion_overrides_evidence() {
        // Gateway keyword present, but so is a gateway exclude
        // pattern; the power-conditioner rule is vetoed symmetrically,
        // so nothing is selected.
        let text = normalize("ゲートウェイ パワコン");
        let (product, score) = classify_product_type(&text);
        assert_eq!(product, None);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // One keyword each for battery unit and PV unit, equal score
        // of 2; the battery-unit rule is declared first.
        let text = normalize("蓄電池 pv");
        let (product, score) = classify_product_type(&text);
        assert_eq!(product, Some(ProductType::BatteryUnit));
        assert_eq!(score, 2);
    }

    #[test]
    fn test_no_evidence() {
        let (product, score) = classify_product_type("関係のない説明文");
        assert_eq!(product, None);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let text = normalize("蓄電池ユニット KP-BU");
        let first = classify_product_type(&text);
        for _ in 0..10 {
            assert_eq!(classify_product_type(&text), first);
        }
    }
}
