//! Builder API for ergonomic engine construction.
//!
//! This module provides fluent builders, declarative transition rows and
//! macros for declaring state and event enums.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::EngineBuilder;
pub use transition::{TransitionBuilder, TransitionRow};

use crate::core::State;

/// Create a handler that moves unconditionally to `state`.
///
/// # Example
///
/// ```
/// use gearshift::builder::goto;
/// use gearshift::Engine;
///
/// let engine = Engine::new("red");
/// engine
///     .register_handler("red", "tick", goto("green"))
///     .register_handler("green", "tick", goto("yellow"))
///     .register_handler("yellow", "tick", goto("red"));
///
/// assert_eq!(engine.dispatch("tick"), Ok("green"));
/// ```
pub fn goto<S: State>(state: S) -> impl Fn() -> S + Send + Sync + 'static {
    move || state.clone()
}
