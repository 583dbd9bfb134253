//! Handlers and the two-level handler registry.

use crate::core::{Event, State, TransitionRecord};
use std::collections::HashMap;
use std::sync::Arc;

/// Caller-supplied transition function.
///
/// Invoked with no arguments when its (state, event) pair is dispatched;
/// performs its side effect and returns the state to move to. Shared via
/// `Arc` so the engine can release its registry borrow before calling it.
pub type Handler<S> = Arc<dyn Fn() -> S + Send + Sync>;

/// Callback run after every committed transition.
pub type Observer<S, E> = Arc<dyn Fn(&TransitionRecord<S, E>) + Send + Sync>;

/// Mapping from state to event to handler.
///
/// Holds at most one handler per (state, event) pair. Insertion order is
/// not preserved.
pub struct Registry<S: State, E: Event> {
    handlers: HashMap<S, HashMap<E, Handler<S>>>,
}

impl<S: State, E: Event> Registry<S, E> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Insert a handler, returning the one it replaced, if any.
    pub fn insert(&mut self, state: S, event: E, handler: Handler<S>) -> Option<Handler<S>> {
        self.handlers
            .entry(state)
            .or_default()
            .insert(event, handler)
    }

    /// Look up the handler for a (state, event) pair.
    pub fn get(&self, state: &S, event: &E) -> Option<&Handler<S>> {
        self.handlers.get(state)?.get(event)
    }

    /// Check whether a handler is registered for a (state, event) pair.
    pub fn contains(&self, state: &S, event: &E) -> bool {
        self.get(state, event).is_some()
    }

    /// Events that have a handler from `state`.
    pub fn events_from<'a>(&'a self, state: &S) -> impl Iterator<Item = &'a E> + 'a {
        self.handlers
            .get(state)
            .into_iter()
            .flat_map(|events| events.keys())
    }

    /// States with at least one registered handler.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.handlers.keys()
    }

    /// Number of registered (state, event) pairs.
    pub fn len(&self) -> usize {
        self.handlers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: State, E: Event> Default for Registry<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
