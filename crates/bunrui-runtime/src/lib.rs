//! Bunrui Runtime — batch orchestration over the classification core.
//!
//! Documents are independent, so a batch run is a bounded parallel
//! map. Results are always correlated back to their document by the
//! caller's id, never by completion order.

pub mod batch;
pub mod types;

pub use batch::BatchClassifier;
pub use types::{Document, DocumentRecord, SearchHit, SearchPartition};
