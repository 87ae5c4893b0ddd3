//! Configuration.
//!
//! Rule tables and scoring weights are compile-time constants in
//! `bunrui-classify`; only the operational knobs live here.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level bunrui configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BunruiConfig {
    /// Maximum keywords returned per document.
    pub max_keywords: usize,
    /// Maximum concurrent classifications in a batch run.
    pub batch_concurrency: usize,
}

impl BunruiConfig {
    /// Create configuration from environment and defaults. A missing
    /// variable falls back to its default; a present but unparsable
    /// one is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_keywords: env_or("BUNRUI_MAX_KEYWORDS", defaults.max_keywords)?,
            batch_concurrency: env_or("BUNRUI_BATCH_CONCURRENCY", defaults.batch_concurrency)?,
        })
    }
}

impl Default for BunruiConfig {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            batch_concurrency: 4,
        }
    }
}

fn env_or(name: &str, default: usize) -> Result<usize> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::Config(format!("{name} must be an integer, got {value:?}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BunruiConfig::default();
        assert_eq!(config.max_keywords, 10);
        assert_eq!(config.batch_concurrency, 4);
    }

    #[test]
    fn test_invalid_env_is_an_error() {
        std::env::set_var("BUNRUI_MAX_KEYWORDS", "many");
        let result = BunruiConfig::from_env();
        std::env::remove_var("BUNRUI_MAX_KEYWORDS");
        assert!(result.is_err());
    }
}
