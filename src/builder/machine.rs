//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::builder::transition::{TransitionBuilder, TransitionRow};
use crate::config::EngineConfig;
use crate::core::{Event, State};
use crate::engine::{Engine, Handler};
use std::sync::Arc;

/// Builder for constructing engines with a fluent API.
///
/// Handlers and rows are registered in the order they were added, so a
/// later entry for the same (state, event) pair wins, exactly as with
/// repeated [`Engine::register_handler`] calls.
pub struct EngineBuilder<S: State, E: Event> {
    initial: Option<S>,
    config: EngineConfig,
    handlers: Vec<(S, E, Handler<S>)>,
}

impl<S: State, E: Event> EngineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: EngineConfig::default(),
            handlers: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Use a non-default engine configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a handler for a (state, event) pair.
    pub fn handler<F>(mut self, state: S, event: E, handler: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.handlers.push((state, event, Arc::new(handler)));
        self
    }

    /// Add a pre-built transition row.
    pub fn row(mut self, row: TransitionRow<S, E>) -> Self {
        for source in row.sources {
            let destination = row.destination.clone();
            self.handlers.push((
                source,
                row.event.clone(),
                Arc::new(move || destination.clone()),
            ));
        }
        self
    }

    /// Add multiple transition rows at once.
    pub fn rows(self, rows: impl IntoIterator<Item = TransitionRow<S, E>>) -> Self {
        rows.into_iter().fold(self, Self::row)
    }

    /// Add a transition row using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let row = builder.build()?;
        Ok(self.row(row))
    }

    /// Build the engine.
    /// Returns an error if no initial state was given.
    pub fn build(self) -> Result<Engine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let engine = Engine::with_config(initial, self.config);
        for (state, event, handler) in self.handlers {
            engine.insert_shared(state, event, handler);
        }

        Ok(engine)
    }
}

impl<S: State, E: Event> Default for EngineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
