//! Macros for declaring state and event enums.

/// Generate a `State` implementation for a fieldless enum.
///
/// The variant named after `initial:` becomes the initial pseudo-state.
///
/// # Example
///
/// ```
/// use statechain::core::State;
/// use statechain::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Unset,
///         Off,
///         On,
///     }
///     initial: Unset
/// }
///
/// assert_eq!(Light::initial(), Light::Unset);
/// assert_eq!(Light::On.name(), "On");
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

        initial: $initial:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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

            fn initial() -> Self {
                Self::$initial
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

/// Generate an `Event` implementation for a fieldless enum.
///
/// The variant named after `no_op:` becomes the reserved "stop chaining"
/// event.
///
/// # Example
///
/// ```
/// use statechain::core::Event;
/// use statechain::event_enum;
///
/// event_enum! {
///     pub enum Switch {
///         NoOp,
///         SwitchOff,
///         SwitchOn,
///     }
///     no_op: NoOp
/// }
///
/// assert!(Switch::NoOp.is_no_op());
/// assert_eq!(Switch::SwitchOn.to_string(), "SwitchOn");
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

        no_op: $no_op:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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

            fn no_op() -> Self {
                Self::$no_op
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Event::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
        initial: Initial
    }

    event_enum! {
        enum TestEvent {
            Nothing,
            Begin,
            Finish,
        }
        no_op: Nothing
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::initial(), TestState::Initial);
        assert!(TestState::Initial.is_initial());
        assert!(!TestState::Complete.is_initial());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Begin.name(), "Begin");
        assert_eq!(TestEvent::no_op(), TestEvent::Nothing);
        assert!(TestEvent::Nothing.is_no_op());
        assert!(!TestEvent::Finish.is_no_op());
    }

    #[test]
    fn generated_enums_display_their_name() {
        assert_eq!(TestState::Complete.to_string(), "Complete");
        assert_eq!(TestEvent::Finish.to_string(), "Finish");
    }

    #[test]
    fn state_enum_supports_visibility_and_attributes() {
        state_enum! {
            /// Doc comments pass through.
            pub enum PublicState {
                #[allow(dead_code)]
                A,
                B,
            }
            initial: B
        }

        assert_eq!(PublicState::initial(), PublicState::B);
    }

    #[test]
    fn generated_enums_serialize_by_name() {
        let json = serde_json::to_string(&TestState::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");

        let event: TestEvent = serde_json::from_str("\"Finish\"").unwrap();
        assert_eq!(event, TestEvent::Finish);
    }
}
