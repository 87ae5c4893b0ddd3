//! Error types for bunrui.
//!
//! The classification API itself is total — every public operation
//! degrades to a well-defined default instead of failing. This type
//! exists for the internal fallible steps behind those operations and
//! for configuration loading; classification errors are caught and
//! logged before they reach a caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Extraction error: {0}")]
    Extract(String),
}

pub type Result<T> = std::result::Result<T, Error>;
