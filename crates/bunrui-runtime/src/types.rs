//! Batch document types.

use bunrui_classify::ClassificationResult;
use serde::{Deserialize, Serialize};

/// One document's worth of OCR text, identified by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

/// Classification output correlated to its source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub result: ClassificationResult,
}

/// One document in a search partition, with the keyword labels it
/// matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub text: String,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
}

/// Matched/unmatched grouping of one search run.
///
/// Regrouping is an explicit move keyed by document id — user action,
/// not classifier output. The classifier is never re-invoked on a
/// move.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPartition {
    pub matched: Vec<SearchHit>,
    pub unmatched: Vec<SearchHit>,
}

impl SearchPartition {
    /// Move a document from the unmatched to the matched group,
    /// tagging it with the given keyword labels. Returns `false` if no
    /// unmatched document has that id.
    pub fn move_to_matched(&mut self, id: &str, keywords: &[String]) -> bool {
        match self.unmatched.iter().position(|hit| hit.id == id) {
            Some(pos) => {
                let mut hit = self.unmatched.remove(pos);
                hit.matched_keywords = keywords.to_vec();
                self.matched.push(hit);
                true
            }
            None => false,
        }
    }

    /// Move a document from the matched to the unmatched group,
    /// clearing its keyword labels. Returns `false` if no matched
    /// document has that id.
    pub fn move_to_unmatched(&mut self, id: &str) -> bool {
        match self.matched.iter().position(|hit| hit.id == id) {
            Some(pos) => {
                let mut hit = self.matched.remove(pos);
                hit.matched_keywords.clear();
                self.unmatched.push(hit);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, keywords: &[&str]) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            text: String::new(),
            matched_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_move_to_matched() {
        let mut partition = SearchPartition {
            matched: vec![],
            unmatched: vec![hit("a", &[]), hit("b", &[])],
        };
        assert!(partition.move_to_matched("b", &["設置前".to_string()]));
        assert_eq!(partition.matched.len(), 1);
        assert_eq!(partition.matched[0].id, "b");
        assert_eq!(partition.matched[0].matched_keywords, vec!["設置前"]);
        assert_eq!(partition.unmatched.len(), 1);
    }

    #[test]
    fn test_move_to_unmatched_clears_labels() {
        let mut partition = SearchPartition {
            matched: vec![hit("a", &["ゲートウェイ"])],
            unmatched: vec![],
        };
        assert!(partition.move_to_unmatched("a"));
        assert!(partition.matched.is_empty());
        assert!(partition.unmatched[0].matched_keywords.is_empty());
    }

    #[test]
    fn test_move_unknown_id() {
        let mut partition = SearchPartition::default();
        assert!(!partition.move_to_matched("missing", &[]));
        assert!(!partition.move_to_unmatched("missing"));
    }
}
