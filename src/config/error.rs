//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when loading an engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for an `EngineConfig`
    #[error("Failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested history capacity exceeds the supported maximum
    #[error("History capacity {requested} exceeds maximum {max}")]
    HistoryCapacityTooLarge { requested: usize, max: usize },
}
