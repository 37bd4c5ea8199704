//! Floating-point literals of the form `0.d+` or `[1-9]d*.d+`.

use crate::alphabet::{is_digit, is_nonzero_digit};
use crate::core::Automaton;
use crate::state_enum;

state_enum! {
    /// States of the floating-point automaton.
    pub enum FloatState {
        LookingForZeroFirst,
        /// Integer part was exactly `0`.
        PeriodRequired,
        WaitingForPeriod,
        DigitRequired,
        FloatingPoint,
        NotFloat,
    }
    initial: LookingForZeroFirst
    accepting: [FloatingPoint]
    sink: [NotFloat]
}

impl Automaton for FloatState {
    fn consume(self, character: char) -> Self {
        match (self, character) {
            (Self::LookingForZeroFirst, '0') => Self::PeriodRequired,
            (Self::LookingForZeroFirst, c) if is_nonzero_digit(c) => Self::WaitingForPeriod,
            (Self::PeriodRequired | Self::WaitingForPeriod, '.') => Self::DigitRequired,
            (Self::WaitingForPeriod, c) if is_digit(c) => Self::WaitingForPeriod,
            (Self::DigitRequired | Self::FloatingPoint, c) if is_digit(c) => Self::FloatingPoint,
            _ => Self::NotFloat,
        }
    }
}
