//! Simplified email addresses: `local@domain.suffix`.
//!
//! Not RFC compliant. The local part may contain anything except `@` and
//! space; the domain and suffix exclude `@`, space and `.`, so exactly one
//! `.` may follow the `@`.

use crate::core::Automaton;
use crate::state_enum;

state_enum! {
    /// States of the email automaton.
    pub enum EmailState {
        LookingForFirstCharPartA,
        WaitingForAtSymbol,
        LookingForFirstCharPartB,
        WaitingForPeriod,
        LookingForFirstCharPartC,
        ValidEmail,
        InvalidEmail,
    }
    initial: LookingForFirstCharPartA
    accepting: [ValidEmail]
    sink: [InvalidEmail]
}

impl Automaton for EmailState {
    fn consume(self, character: char) -> Self {
        match (self, character) {
            (Self::InvalidEmail, _) | (_, ' ') => Self::InvalidEmail,
            (Self::LookingForFirstCharPartA, '@') => Self::InvalidEmail,
            (Self::WaitingForAtSymbol, '@') => Self::LookingForFirstCharPartB,
            (Self::LookingForFirstCharPartA | Self::WaitingForAtSymbol, _) => {
                Self::WaitingForAtSymbol
            }
            (_, '@') => Self::InvalidEmail,
            (Self::WaitingForPeriod, '.') => Self::LookingForFirstCharPartC,
            (_, '.') => Self::InvalidEmail,
            (Self::LookingForFirstCharPartB | Self::WaitingForPeriod, _) => Self::WaitingForPeriod,
            (Self::LookingForFirstCharPartC | Self::ValidEmail, _) => Self::ValidEmail,
        }
    }
}
