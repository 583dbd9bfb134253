//! Macros for declaring state and event enums.

/// Declare an enum and implement `State` for it.
///
/// # Example
///
/// ```
/// use gearshift::state_enum;
/// use gearshift::core::State;
///
/// state_enum! {
///     pub enum FanState {
///         Off,
///         Low,
///         High,
///         Broken,
///     }
///     final: [Broken]
/// }
///
/// assert_eq!(FanState::Low.name(), "Low");
/// assert!(FanState::Broken.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Declare an enum and implement `Event` for it.
///
/// # Example
///
/// ```
/// use gearshift::event_enum;
/// use gearshift::core::Event;
///
/// event_enum! {
///     pub enum FanButton {
///         Off,
///         Low,
///         High,
///     }
/// }
///
/// assert_eq!(FanButton::High.name(), "High");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};
    use crate::Engine;

    state_enum! {
        enum TestState {
            Idle,
            Running,
            Done,
        }
        final: [Done]
    }

    event_enum! {
        enum TestEvent {
            Start,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert!(!TestState::Idle.is_final());
        assert!(!TestState::Running.is_final());
        assert!(TestState::Done.is_final());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Finish.name(), "Finish");
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert!(!MinimalState::Two.is_final());
    }

    #[test]
    fn generated_enums_drive_an_engine() {
        let engine = Engine::new(TestState::Idle);
        engine
            .register_handler(TestState::Idle, TestEvent::Start, || TestState::Running)
            .register_handler(TestState::Running, TestEvent::Finish, || TestState::Done);

        assert_eq!(engine.dispatch(TestEvent::Finish), Ok(TestState::Idle));
        assert_eq!(engine.dispatch(TestEvent::Start), Ok(TestState::Running));
        assert_eq!(engine.dispatch(TestEvent::Finish), Ok(TestState::Done));
        assert!(engine.current_state().is_final());
    }
}
