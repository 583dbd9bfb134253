//! Engine configuration.
//!
//! An [`EngineConfig`] controls the parts of engine behavior that are a
//! matter of taste rather than semantics: how much transition history is
//! retained and whether duplicate handler registrations are reported.
//!
//! # Example
//!
//! ```rust
//! use gearshift::config::{ConfigBuilder, DuplicateStrategy, EngineConfig};
//!
//! let config = ConfigBuilder::new()
//!     .history_capacity(16)
//!     .duplicates(DuplicateStrategy::Silent)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.history_capacity, 16);
//!
//! let parsed = EngineConfig::from_json(r#"{ "history_capacity": 0 }"#).unwrap();
//! assert_eq!(parsed.history_capacity, 0);
//! assert_eq!(parsed.duplicates, DuplicateStrategy::Warn);
//! ```

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Default number of transition records kept per engine.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Largest history capacity accepted from external configuration.
pub const MAX_HISTORY_CAPACITY: usize = 65_536;

/// How a second registration for an occupied (state, event) pair is reported.
///
/// The new handler replaces the old one under either strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateStrategy {
    /// Overwrite and emit a warning-level log event
    #[default]
    Warn,

    /// Overwrite without logging
    Silent,
}

/// Tunables for a single engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of committed transitions retained in history. Zero disables it.
    pub history_capacity: usize,

    /// Reporting of duplicate handler registrations
    pub duplicates: DuplicateStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            duplicates: DuplicateStrategy::Warn,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are within supported bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryCapacityTooLarge {
                requested: self.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            });
        }
        Ok(())
    }
}
