//! Bunrui Core — error types and configuration shared across the workspace.

pub mod config;
pub mod error;

pub use config::BunruiConfig;
pub use error::{Error, Result};
