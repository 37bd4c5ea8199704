//! Macros for declaring automaton state sets.

/// Declare a closed state enum and generate its `State` implementation.
///
/// The enum gets `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and serde
/// derives. `initial:` names the start state, `accepting:` the states that
/// accept at end of input, and the optional `sink:` list the absorbing states.
///
/// # Example
///
/// ```
/// use charstate::core::{Automaton, State};
/// use charstate::state_enum;
///
/// state_enum! {
///     pub enum AbState {
///         Start,
///         SawA,
///         Done,
///         Dead,
///     }
///     initial: Start
///     accepting: [Done]
///     sink: [Dead]
/// }
///
/// impl Automaton for AbState {
///     fn consume(self, character: char) -> Self {
///         match (self, character) {
///             (Self::Start, 'a') => Self::SawA,
///             (Self::SawA, 'b') => Self::Done,
///             _ => Self::Dead,
///         }
///     }
/// }
///
/// assert_eq!(AbState::INITIAL, AbState::Start);
/// assert!(AbState::Done.is_accepting());
/// assert!(AbState::Dead.is_sink());
/// assert_eq!(AbState::SawA.name(), "SawA");
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
        accepting: [$($accepting:ident),+ $(,)?]
        $(sink: [$($sink:ident),* $(,)?])?
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
            const INITIAL: Self = Self::$initial;

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_accepting(&self) -> bool {
                matches!(self, $(Self::$accepting)|+)
            }

            #[allow(unreachable_patterns)]
            fn is_sink(&self) -> bool {
                match self {
                    $($(Self::$sink => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
