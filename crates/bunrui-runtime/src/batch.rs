//! Parallel batch classification.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use bunrui_classify::{classify_with, match_keywords, ClassificationResult};
use bunrui_core::BunruiConfig;

use crate::types::{Document, DocumentRecord, SearchHit, SearchPartition};

/// Runs the classification core over batches of documents with bounded
/// concurrency. Holds only configuration; the core itself is
/// stateless, so one instance serves any number of batches.
pub struct BatchClassifier {
    concurrency: usize,
    max_keywords: usize,
}

impl BatchClassifier {
    pub fn new(config: &BunruiConfig) -> Self {
        Self {
            concurrency: config.batch_concurrency.max(1),
            max_keywords: config.max_keywords,
        }
    }

    /// Classify a batch of documents concurrently.
    ///
    /// Output arrives in input order, each record carrying the
    /// caller's document id; completion order never leaks out. A
    /// document whose classification task fails gets the degraded
    /// default record rather than poisoning the batch.
    pub async fn classify(&self, docs: Vec<Document>) -> Vec<DocumentRecord> {
        let total = docs.len();
        let max_keywords = self.max_keywords;

        let records: Vec<DocumentRecord> = stream::iter(docs)
            .map(|doc| async move {
                let Document { id, text } = doc;
                let outcome =
                    tokio::task::spawn_blocking(move || classify_with(&text, max_keywords)).await;
                let result = match outcome {
                    Ok(result) => result,
                    Err(e) => {
                        warn!("classification task failed for document {id}: {e}");
                        ClassificationResult::default()
                    }
                };
                DocumentRecord { id, result }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        info!("classified {total} documents");
        records
    }

    /// Match a batch of documents against search keywords and
    /// partition them into matched and unmatched groups. A document is
    /// matched when at least one keyword survives product-aware
    /// filtering; its hit carries the matched labels for display.
    pub async fn search(&self, docs: Vec<Document>, keywords: Vec<String>) -> SearchPartition {
        let keywords = Arc::new(keywords);

        let hits: Vec<SearchHit> = stream::iter(docs)
            .map(|doc| {
                let keywords = Arc::clone(&keywords);
                async move {
                    let Document { id, text } = doc;
                    let task_text = text.clone();
                    let matched_keywords = tokio::task::spawn_blocking(move || {
                        match_keywords(&task_text, &keywords)
                    })
                    .await
                    .unwrap_or_else(|e| {
                        warn!("keyword matching failed for document {id}: {e}");
                        Vec::new()
                    });
                    SearchHit {
                        id,
                        text,
                        matched_keywords,
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut partition = SearchPartition::default();
        for hit in hits {
            if hit.matched_keywords.is_empty() {
                partition.unmatched.push(hit);
            } else {
                partition.matched.push(hit);
            }
        }

        info!(
            matched = partition.matched.len(),
            unmatched = partition.unmatched.len(),
            "search batch complete"
        );
        partition
    }
}
