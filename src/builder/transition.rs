//! Declarative transition rows.
//!
//! A [`TransitionRow`] says "on `event`, from any of `sources`, go to
//! `destination`". Applying it to an engine registers one handler per
//! source, so a whole transition table can be written as data.

use crate::builder::error::BuildError;
use crate::builder::goto;
use crate::core::{Event, State};
use crate::engine::Engine;

/// One row of a transition table.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRow<S: State, E: Event> {
    pub event: E,
    pub sources: Vec<S>,
    pub destination: S,
}

impl<S: State, E: Event> TransitionRow<S, E> {
    /// Register a handler on `engine` for each source state.
    ///
    /// Sources that already have a handler for this event are overwritten,
    /// the same as with [`Engine::register_handler`].
    pub fn apply(&self, engine: &Engine<S, E>) {
        for source in &self.sources {
            engine.register_handler(
                source.clone(),
                self.event.clone(),
                goto(self.destination.clone()),
            );
        }
    }
}

/// Builder for transition rows with a fluent API.
pub struct TransitionBuilder<S: State, E: Event> {
    event: Option<E>,
    sources: Vec<S>,
    destination: Option<S>,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            event: None,
            sources: Vec::new(),
            destination: None,
        }
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Add a source state (at least one required).
    pub fn from(mut self, state: S) -> Self {
        self.sources.push(state);
        self
    }

    /// Add several source states.
    pub fn from_any<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.sources.extend(states);
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.destination = Some(state);
        self
    }

    /// Build the row.
    pub fn build(self) -> Result<TransitionRow<S, E>, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.sources.is_empty() {
            return Err(BuildError::MissingSources);
        }
        let destination = self.destination.ok_or(BuildError::MissingDestination)?;

        Ok(TransitionRow {
            event,
            sources: self.sources,
            destination,
        })
    }
}

impl<S: State, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
