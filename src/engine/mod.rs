//! The FSM engine: handler registry and event dispatch.
//!
//! # Key Concepts
//!
//! - **Handlers**: zero-argument closures registered per (state, event)
//!   pair, returning the next state
//! - **Dispatch**: runs the handler for the current state and commits its
//!   result under the engine's exclusive lock
//! - **Observers**: callbacks notified of every committed transition
//!
//! Unknown states and events are never errors. The only dispatch failure is
//! a handler dispatching back into its own engine.

mod error;
mod handler;
mod machine;

pub use error::DispatchError;
pub use handler::{Handler, Observer, Registry};
pub use machine::Engine;
