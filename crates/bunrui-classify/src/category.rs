//! Document category classification.
//!
//! Scores normalized text against a fixed table of category keyword
//! rules. Categories cover the paperwork of a subsidy application:
//! application forms, business plans, budget plans, quotations,
//! invoices, and a catch-all.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A document category. Serialized with the Japanese labels the
/// surrounding system stores and displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentCategory {
    /// 申請書 — application form.
    #[serde(rename = "申請書")]
    Application,
    /// 事業計画書 — business plan.
    #[serde(rename = "事業計画書")]
    BusinessPlan,
    /// 収支計画書 — budget plan.
    #[serde(rename = "収支計画書")]
    BudgetPlan,
    /// 見積書 — quotation.
    #[serde(rename = "見積書")]
    Quotation,
    /// 請求書 — invoice.
    #[serde(rename = "請求書")]
    Invoice,
    /// その他 — the zero-score fallback.
    #[serde(rename = "その他")]
    Other,
}

impl DocumentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Application => "申請書",
            Self::BusinessPlan => "事業計画書",
            Self::BudgetPlan => "収支計画書",
            Self::Quotation => "見積書",
            Self::Invoice => "請求書",
            Self::Other => "その他",
        }
    }
}

struct CategoryRule {
    category: DocumentCategory,
    keywords: &'static [&'static str],
}

/// Characteristic keywords per category. Rules are scanned in
/// declaration order, and only a strictly higher score replaces the
/// running best, so the first rule to reach the maximum wins ties.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: DocumentCategory::Application,
        keywords: &["申請", "補助金", "助成金", "交付", "様式", "承認"],
    },
    CategoryRule {
        category: DocumentCategory::BusinessPlan,
        keywords: &["事業計画", "実施計画", "目的", "概要", "効果", "期間"],
    },
    CategoryRule {
        category: DocumentCategory::BudgetPlan,
        keywords: &["収支", "予算", "経費", "支出", "収入", "内訳"],
    },
    CategoryRule {
        category: DocumentCategory::Quotation,
        keywords: &["見積", "見積書", "税込", "消費税", "合計金額", "単価"],
    },
    CategoryRule {
        category: DocumentCategory::Invoice,
        keywords: &["請求", "請求書", "支払", "振込", "口座", "期限"],
    },
    CategoryRule {
        category: DocumentCategory::Other,
        keywords: &[],
    },
];

/// Classify normalized text into a document category.
///
/// Confidence is the count of distinct rule keywords present in the
/// text over the rule's keyword count plus one, so it stays below 1
/// even on a full match. Text matching no rule falls back to
/// [`DocumentCategory::Other`] with zero confidence.
pub fn classify_category(normalized: &str) -> (DocumentCategory, f64) {
    let mut best = (DocumentCategory::Other, 0.0);
    for rule in CATEGORY_RULES {
        let confidence = rule_confidence(normalized, rule.keywords);
        if confidence > best.1 {
            best = (rule.category, confidence);
        }
    }

    debug!(
        category = best.0.label(),
        confidence = best.1,
        "category classified"
    );
    best
}

fn rule_confidence(text: &str, keywords: &[&str]) -> f64 {
    let present = keywords.iter().filter(|kw| text.contains(**kw)).count();
    present as f64 / (keywords.len() + 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_form() {
        let (category, confidence) = classify_category("補助金交付申請書 様式第1号");
        assert_eq!(category, DocumentCategory::Application);
        // 申請, 補助金, 交付, 様式 present out of 6 keywords.
        assert!((confidence - 4.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_invoice() {
        let (category, _) = classify_category("請求書 お支払期限 振込口座");
        assert_eq!(category, DocumentCategory::Invoice);
    }

    #[test]
    fn test_empty_falls_back_to_other() {
        let (category, confidence) = classify_category("");
        assert_eq!(category, DocumentCategory::Other);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_no_match_falls_back_to_other() {
        let (category, confidence) = classify_category("設置工事の写真");
        assert_eq!(category, DocumentCategory::Other);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // 交付 scores for Application, 期間 for BusinessPlan: one
        // distinct keyword each, equal confidence, first rule wins.
        let (category, _) = classify_category("交付 期間");
        assert_eq!(category, DocumentCategory::Application);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DocumentCategory::Other.label(), "その他");
        assert_eq!(DocumentCategory::Quotation.label(), "見積書");
    }
}
