//! Gearshift: a small, thread-safe finite state machine engine
//!
//! A host object owns an [`Engine`], registers a handler per
//! (state, event) pair, and drives transitions by dispatching events. Each
//! handler performs its side effect and returns the next state. Pairs with
//! no handler are no-ops, so any event may be dispatched from any state.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: opaque, comparable tokens via the [`State`] and
//!   [`Event`] traits (implemented for string types and generated by
//!   [`state_enum!`] / [`event_enum!`])
//! - **Engine**: current state plus handler registry behind one exclusive
//!   lock; dispatches are serialized and each handler's side effect is
//!   atomic with its transition
//! - **Builder**: fluent construction and declarative
//!   `{event, sources, destination}` transition rows
//!
//! # Example
//!
//! ```rust
//! use gearshift::Engine;
//!
//! let fan = Engine::new("off".to_string());
//! fan.register_handler("off".into(), "press".to_string(), || "on".into())
//!     .register_handler("on".into(), "press".to_string(), || "off".into());
//!
//! assert_eq!(fan.dispatch("press".into()).unwrap(), "on");
//! assert_eq!(fan.dispatch("unplug".into()).unwrap(), "on");
//! assert_eq!(fan.current_state(), "on");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{goto, BuildError, EngineBuilder, TransitionBuilder, TransitionRow};
pub use crate::config::{ConfigError, DuplicateStrategy, EngineConfig};
pub use crate::core::{Event, State, StateHistory, TransitionRecord};
pub use crate::engine::{DispatchError, Engine, Handler};
