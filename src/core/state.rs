//! State and Automaton traits shared by every grammar.
//!
//! A state carries no payload: everything an automaton needs to remember about
//! the prefix it has read is captured by which state it is in.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Identity and classification metadata for an automaton state.
///
/// All methods are pure. States are small immutable values; moving from one
/// state to the next always produces a new value instead of mutating the old one.
///
/// # Required Traits
///
/// - `Copy`: states are fieldless and are passed around by value
/// - `Eq`: states are compared to decide acceptance
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in serializable traces
///
/// Implementations are normally generated with [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use charstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Toggle {
///     Off,
///     On,
/// }
///
/// impl State for Toggle {
///     const INITIAL: Self = Toggle::Off;
///
///     fn all() -> &'static [Self] {
///         &[Toggle::Off, Toggle::On]
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
///
///     fn is_accepting(&self) -> bool {
///         matches!(self, Self::On)
///     }
/// }
///
/// assert!(!Toggle::INITIAL.is_accepting());
/// assert_eq!(Toggle::all().len(), 2);
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// The state every classification starts from.
    const INITIAL: Self;

    /// Every state of the automaton, in declaration order.
    fn all() -> &'static [Self];

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if reaching this state after the last character accepts the input.
    fn is_accepting(&self) -> bool;

    /// Check if this is a sink: a state every character maps back to.
    ///
    /// Default implementation returns `false`.
    fn is_sink(&self) -> bool {
        false
    }
}

/// A state together with its transition function.
///
/// `consume` must be total: every `char`, ASCII or not, maps to exactly one
/// next state of the same automaton.
pub trait Automaton: State {
    /// Produce the state reached after reading `character` from `self`.
    fn consume(self, character: char) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Parity {
            Even,
            Odd,
            Broken,
        }
        initial: Even
        accepting: [Even]
        sink: [Broken]
    }

    impl Automaton for Parity {
        fn consume(self, character: char) -> Self {
            match (self, character) {
                (Self::Broken, _) => Self::Broken,
                (Self::Even, '1') => Self::Odd,
                (Self::Odd, '1') => Self::Even,
                (state, '0') => state,
                _ => Self::Broken,
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Parity::Even.name(), "Even");
        assert_eq!(Parity::Odd.name(), "Odd");
        assert_eq!(Parity::Broken.name(), "Broken");
    }

    #[test]
    fn all_lists_every_state() {
        assert_eq!(Parity::INITIAL, Parity::Even);
        assert_eq!(Parity::all()[0], Parity::INITIAL);
        assert_eq!(Parity::all().len(), 3);
    }

    #[test]
    fn accepting_and_sink_flags() {
        assert!(Parity::Even.is_accepting());
        assert!(!Parity::Odd.is_accepting());
        assert!(Parity::Broken.is_sink());
        assert!(!Parity::Odd.is_sink());
    }

    #[test]
    fn consume_produces_new_state() {
        let state = Parity::INITIAL;
        let next = state.consume('1');
        assert_eq!(state, Parity::Even);
        assert_eq!(next, Parity::Odd);
        assert_eq!(next.consume('x'), Parity::Broken);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Parity::Odd;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Parity = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
