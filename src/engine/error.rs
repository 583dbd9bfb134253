//! Dispatch error types.

use thiserror::Error;

/// Errors that can occur while dispatching an event.
///
/// Dispatching an event with no registered handler is not an error; it
/// leaves the current state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A handler or transition observer dispatched into its own engine
    #[error("Reentrant dispatch of event '{event}' while handling a transition from state '{state}'")]
    Reentrant { state: String, event: String },
}
