//! Core token and record types.
//!
//! This module contains the vocabulary the engine is generic over:
//! - `State` and `Event` token traits
//! - Transition records and the bounded history they are kept in
//!
//! Nothing in this module takes a lock or performs I/O.

mod history;
mod state;

pub use history::{StateHistory, TransitionRecord};
pub use state::{Event, State};
