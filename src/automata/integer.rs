//! Non-negative integers without leading zeros.

use crate::alphabet::{is_digit, is_nonzero_digit};
use crate::core::Automaton;
use crate::state_enum;

state_enum! {
    /// States of the `[1-9][0-9]*` integer automaton.
    pub enum IntegerState {
        LookingForDigit,
        Integer,
        NonInteger,
    }
    initial: LookingForDigit
    accepting: [Integer]
    sink: [NonInteger]
}

impl Automaton for IntegerState {
    fn consume(self, character: char) -> Self {
        match self {
            Self::LookingForDigit if is_nonzero_digit(character) => Self::Integer,
            Self::Integer if is_digit(character) => Self::Integer,
            _ => Self::NonInteger,
        }
    }
}
