//! "Complex" passwords.
//!
//! Accepted strings contain an uppercase letter together with a special
//! character and do not end on a special character. When the capital comes
//! first, a non-special character must follow the special one.

use crate::alphabet::{is_capital, is_special};
use crate::core::Automaton;
use crate::state_enum;

state_enum! {
    /// States of the complex-password automaton.
    ///
    /// There is no sink: `InvalidPassword` recovers on the next non-special
    /// character.
    pub enum PasswordState {
        LookingForAllRequirements,
        /// A special character has been seen, no capital yet.
        LookingForCapital,
        /// A capital has been seen, no special character yet.
        LookingForSpecialCharacter,
        LookingForNonSpecialChar,
        ValidPassword,
        /// Requirements met, but currently ending on a special character.
        InvalidPassword,
    }
    initial: LookingForAllRequirements
    accepting: [ValidPassword]
}

impl Automaton for PasswordState {
    fn consume(self, character: char) -> Self {
        let special = is_special(character);
        match self {
            Self::LookingForAllRequirements if special => Self::LookingForCapital,
            Self::LookingForAllRequirements if is_capital(character) => {
                Self::LookingForSpecialCharacter
            }
            Self::LookingForAllRequirements => Self::LookingForAllRequirements,
            Self::LookingForCapital if is_capital(character) => Self::ValidPassword,
            Self::LookingForCapital => Self::LookingForCapital,
            Self::LookingForSpecialCharacter if special => Self::LookingForNonSpecialChar,
            Self::LookingForSpecialCharacter => Self::LookingForSpecialCharacter,
            Self::LookingForNonSpecialChar if special => Self::LookingForNonSpecialChar,
            Self::ValidPassword | Self::InvalidPassword if special => Self::InvalidPassword,
            Self::LookingForNonSpecialChar | Self::ValidPassword | Self::InvalidPassword => {
                Self::ValidPassword
            }
        }
    }
}
