//! Frequency-based keyword extraction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::normalize;

/// Default cap on keywords returned per document.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Characters that terminate a token, in addition to whitespace.
const TOKEN_SEPARATORS: &[char] = &[',', '.', '。', '、'];

/// A keyword and its relative frequency score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub keyword: String,
    pub score: f64,
}

/// Split normalized text into tokens on whitespace and common
/// punctuation. Zero-length tokens are dropped; input with no
/// separators comes back as a single token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || TOKEN_SEPARATORS.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the top `max_keywords` tokens by relative frequency.
///
/// Each score is the token's count over the total token count, so all
/// scores sum to 1. Ordering is descending by score with ties kept in
/// first-seen order, which makes the output deterministic for
/// identical input. Empty input yields an empty list.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<KeywordScore> {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    if tokens.is_empty() {
        return Vec::new();
    }

    let total = tokens.len() as f64;

    // Discovery order doubles as the tie-break order.
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        if !counts.contains_key(&token) {
            order.push(token.clone());
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut keywords: Vec<KeywordScore> = order
        .into_iter()
        .map(|keyword| {
            let score = counts[&keyword] as f64 / total;
            KeywordScore { keyword, score }
        })
        .collect();
    // sort_by is stable, so equal scores keep discovery order.
    keywords.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    keywords.truncate(max_keywords);

    debug!("extracted {} keywords", keywords.len());
    keywords
}
