//! State and event tokens.
//!
//! The engine treats states and events as opaque tokens: it only needs to
//! compare them, hash them, clone them and print them. Both traits are
//! implemented for the common string types, and the `state_enum!` /
//! `event_enum!` macros implement them for plain enums.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Trait for state machine states.
///
/// A state is one mode of the modeled entity. Equality is exact value
/// equality; the engine never inspects a state beyond that.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed out by value
/// - `Eq` + `Hash`: states key the handler registry
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: engines are shared across threads
///
/// # Example
///
/// ```rust
/// use gearshift::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert!(!DoorState::Locked.is_final());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the engine keeps dispatching from final
    /// states if handlers are registered for them.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for events that drive transitions.
///
/// Same shape as [`State`], but a separate namespace: a state and an event
/// with the same name are unrelated.
///
/// # Example
///
/// ```rust
/// use gearshift::core::Event;
///
/// let event = String::from("open");
/// assert_eq!(Event::name(&event), "open");
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

macro_rules! impl_str_token {
    ($($ty:ty),* $(,)?) => {
        $(
            impl State for $ty {
                fn name(&self) -> &str {
                    self
                }
            }

            impl Event for $ty {
                fn name(&self) -> &str {
                    self
                }
            }
        )*
    };
}

impl_str_token!(String, &'static str, Box<str>, Arc<str>);
