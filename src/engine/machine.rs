//! The thread-safe FSM engine.

use crate::config::{DuplicateStrategy, EngineConfig, MAX_HISTORY_CAPACITY};
use crate::core::{Event, State, StateHistory, TransitionRecord};
use crate::engine::error::DispatchError;
use crate::engine::handler::{Handler, Observer, Registry};
use parking_lot::ReentrantMutex;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Finite state machine driven by dispatched events.
///
/// The engine holds exactly one current state and a registry of handlers
/// keyed by (state, event). [`dispatch`](Engine::dispatch) looks up the
/// handler for the current state, runs it and adopts the state it returns.
/// Pairs without a handler are no-ops, so a fixed vocabulary of events can
/// be dispatched from any state.
///
/// # Locking
///
/// All operations take one per-engine exclusive lock, and handlers and
/// transition observers run while it is held. A handler's side effect is
/// therefore ordered with its transition, and concurrent dispatches are
/// fully serialized.
///
/// A handler or observer must not dispatch into its own engine. Doing so
/// returns [`DispatchError::Reentrant`] instead of deadlocking. Reading the
/// state and registering handlers from inside a handler is allowed; reads
/// observe the state the transition started from.
///
/// # Example
///
/// ```rust
/// use gearshift::Engine;
///
/// let door = Engine::new("closed");
/// door.register_handler("closed", "open", || "open")
///     .register_handler("open", "close", || "closed");
///
/// assert_eq!(door.dispatch("open"), Ok("open"));
/// assert_eq!(door.dispatch("open"), Ok("open"));
/// assert_eq!(door.dispatch("close"), Ok("closed"));
/// ```
pub struct Engine<S: State, E: Event> {
    id: Uuid,
    config: EngineConfig,
    slot: ReentrantMutex<Slot<S, E>>,
}

struct Slot<S: State, E: Event> {
    machine: RefCell<Machine<S, E>>,
    dispatching: Cell<bool>,
}

struct Machine<S: State, E: Event> {
    current: S,
    registry: Registry<S, E>,
    observers: Vec<Observer<S, E>>,
    history: StateHistory<S, E>,
}

/// Marks the engine as inside a handler until dropped, including on unwind.
struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl<S: State, E: Event> Engine<S, E> {
    /// Create an engine in `initial` with an empty registry and default config.
    pub fn new(initial: S) -> Self {
        Self::with_config(initial, EngineConfig::default())
    }

    /// Create an engine in `initial` with an empty registry.
    ///
    /// A `history_capacity` above [`MAX_HISTORY_CAPACITY`] is clamped to it.
    pub fn with_config(initial: S, mut config: EngineConfig) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(engine = %id, state = initial.name(), "engine created");

        if config.history_capacity > MAX_HISTORY_CAPACITY {
            tracing::warn!(
                engine = %id,
                requested = config.history_capacity,
                max = MAX_HISTORY_CAPACITY,
                "history capacity too large; clamping"
            );
            config.history_capacity = MAX_HISTORY_CAPACITY;
        }

        let machine = Machine {
            current: initial,
            registry: Registry::new(),
            observers: Vec::new(),
            history: StateHistory::with_capacity(config.history_capacity),
        };

        Self {
            id,
            config,
            slot: ReentrantMutex::new(Slot {
                machine: RefCell::new(machine),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Identifier attached to this engine's log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register `handler` for `(state, event)` and return the engine for chaining.
    ///
    /// A handler already registered for the same pair is replaced. With
    /// [`DuplicateStrategy::Warn`] the replacement is logged at warn level.
    pub fn register_handler<F>(&self, state: S, event: E, handler: F) -> &Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.insert_handler(state, event, handler);
        self
    }

    /// Register `handler` for `(state, event)`, returning the handler it replaced.
    pub fn insert_handler<F>(&self, state: S, event: E, handler: F) -> Option<Handler<S>>
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.insert_shared(state, event, Arc::new(handler))
    }

    /// Register an already shared handler for `(state, event)`.
    pub fn insert_shared(&self, state: S, event: E, handler: Handler<S>) -> Option<Handler<S>> {
        let slot = self.slot.lock();
        let mut machine = slot.machine.borrow_mut();

        let replaced = machine
            .registry
            .insert(state.clone(), event.clone(), handler);

        match (&replaced, self.config.duplicates) {
            (Some(_), DuplicateStrategy::Warn) => tracing::warn!(
                engine = %self.id,
                state = state.name(),
                event = event.name(),
                "handler already defined for state and event; overwriting"
            ),
            (Some(_), DuplicateStrategy::Silent) => {}
            (None, _) => tracing::debug!(
                engine = %self.id,
                state = state.name(),
                event = event.name(),
                "handler registered"
            ),
        }

        replaced
    }

    /// Register a callback run after every committed transition.
    ///
    /// Observers run inside the exclusive section, after the new state is
    /// committed, in registration order. They are not run for no-op
    /// dispatches.
    pub fn on_transition<F>(&self, observer: F) -> &Self
    where
        F: Fn(&TransitionRecord<S, E>) + Send + Sync + 'static,
    {
        let slot = self.slot.lock();
        slot.machine.borrow_mut().observers.push(Arc::new(observer));
        drop(slot);
        self
    }

    /// Get the current state.
    pub fn current_state(&self) -> S {
        let slot = self.slot.lock();
        let current = slot.machine.borrow().current.clone();
        current
    }

    /// Check whether the engine is currently in `state`.
    pub fn is(&self, state: &S) -> bool {
        let slot = self.slot.lock();
        let is_current = slot.machine.borrow().current == *state;
        is_current
    }

    /// Check whether `event` has a handler from the current state.
    pub fn can(&self, event: &E) -> bool {
        let slot = self.slot.lock();
        let machine = slot.machine.borrow();
        machine.registry.contains(&machine.current, event)
    }

    /// Events that have a handler from the current state, in no particular order.
    pub fn available_events(&self) -> Vec<E> {
        let slot = self.slot.lock();
        let machine = slot.machine.borrow();
        let events = machine
            .registry
            .events_from(&machine.current)
            .cloned()
            .collect();
        events
    }

    /// Number of registered (state, event) pairs.
    pub fn handler_count(&self) -> usize {
        let slot = self.slot.lock();
        let count = slot.machine.borrow().registry.len();
        count
    }

    /// Snapshot of the retained transition history.
    pub fn history(&self) -> StateHistory<S, E> {
        let slot = self.slot.lock();
        let history = slot.machine.borrow().history.clone();
        history
    }

    /// Dispatch `event` against the current state.
    ///
    /// Runs the handler registered for (current state, event), commits the
    /// state it returns, notifies observers and returns the new state. With
    /// no matching handler the current state is returned unchanged and
    /// nothing runs.
    ///
    /// Blocks until the engine's lock is available. If the handler panics,
    /// the current state is left unchanged and the panic propagates.
    pub fn dispatch(&self, event: E) -> Result<S, DispatchError> {
        let slot = self.slot.lock();

        if slot.dispatching.get() {
            let state = slot.machine.borrow().current.name().to_string();
            tracing::error!(
                engine = %self.id,
                state = %state,
                event = event.name(),
                "reentrant dispatch from within a handler"
            );
            return Err(DispatchError::Reentrant {
                state,
                event: event.name().to_string(),
            });
        }

        let (from, handler) = {
            let machine = slot.machine.borrow();
            let from = machine.current.clone();
            match machine.registry.get(&from, &event) {
                Some(handler) => (from, Arc::clone(handler)),
                None => {
                    tracing::debug!(
                        engine = %self.id,
                        state = from.name(),
                        event = event.name(),
                        "no handler for event; state unchanged"
                    );
                    return Ok(from);
                }
            }
        };

        let _guard = DispatchGuard::enter(&slot.dispatching);
        let to = handler();
        let record = TransitionRecord::now(from, to.clone(), event);

        let observers = {
            let mut machine = slot.machine.borrow_mut();
            machine.current = to.clone();
            machine.history.record(record.clone());
            machine.observers.clone()
        };

        tracing::info!(
            engine = %self.id,
            from = record.from.name(),
            to = record.to.name(),
            event = record.event.name(),
            "state changed"
        );

        for observer in &observers {
            observer(&record);
        }

        Ok(to)
    }
}

impl<S: State, E: Event> fmt::Debug for Engine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.lock();
        let machine = slot.machine.borrow();
        f.debug_struct("Engine")
            .field("id", &self.id)
            .field("current", &machine.current)
            .field("handlers", &machine.registry.len())
            .field("states", &machine.registry.states().count())
            .finish_non_exhaustive()
    }
}
