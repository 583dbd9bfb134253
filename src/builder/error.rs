//! Build errors for engine and transition row builders.

use thiserror::Error;

/// Errors that can occur when building engines and transition rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition has no source states. Call .from(state) at least once")]
    MissingSources,

    #[error("Transition destination not specified. Call .to(state)")]
    MissingDestination,
}
