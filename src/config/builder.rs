//! Builder API for engine configuration.

use crate::config::{ConfigError, DuplicateStrategy, EngineConfig};

/// Builder for creating an [`EngineConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: EngineConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many committed transitions are retained
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Turn transition history off
    pub fn without_history(self) -> Self {
        self.history_capacity(0)
    }

    /// Set duplicate registration reporting
    pub fn duplicates(mut self, strategy: DuplicateStrategy) -> Self {
        self.config.duplicates = strategy;
        self
    }

    /// Build the configuration.
    /// Returns an error if a value is out of bounds.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
