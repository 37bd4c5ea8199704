//! Binary numerals that start and end with `1`.

use crate::core::Automaton;
use crate::state_enum;

state_enum! {
    /// States of the `1[01]*1 | 1` binary automaton.
    pub enum BinaryState {
        LookingForOneFirst,
        ValidBinary,
        /// Read at least one `0` since the last `1`.
        Incomplete,
        InvalidBinary,
    }
    initial: LookingForOneFirst
    accepting: [ValidBinary]
    sink: [InvalidBinary]
}

impl Automaton for BinaryState {
    fn consume(self, character: char) -> Self {
        match (self, character) {
            (Self::InvalidBinary, _) => Self::InvalidBinary,
            (Self::LookingForOneFirst | Self::ValidBinary | Self::Incomplete, '1') => {
                Self::ValidBinary
            }
            (Self::ValidBinary | Self::Incomplete, '0') => Self::Incomplete,
            _ => Self::InvalidBinary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classify, State};

    #[test]
    fn looking_for_one_first_transitions() {
        let state = BinaryState::LookingForOneFirst;
        assert_eq!(state.consume('1'), BinaryState::ValidBinary);
        assert_eq!(state.consume('0'), BinaryState::InvalidBinary);
        assert_eq!(state.consume('a'), BinaryState::InvalidBinary);
    }

    #[test]
    fn valid_binary_transitions() {
        let state = BinaryState::ValidBinary;
        assert_eq!(state.consume('1'), BinaryState::ValidBinary);
        assert_eq!(state.consume('0'), BinaryState::Incomplete);
        assert_eq!(state.consume('2'), BinaryState::InvalidBinary);
    }

    #[test]
    fn incomplete_transitions() {
        let state = BinaryState::Incomplete;
        assert_eq!(state.consume('0'), BinaryState::Incomplete);
        assert_eq!(state.consume('1'), BinaryState::ValidBinary);
        assert_eq!(state.consume(' '), BinaryState::InvalidBinary);
    }

    #[test]
    fn invalid_binary_absorbs_everything() {
        for character in ['0', '1', 'a', ' ', '.'] {
            assert_eq!(
                BinaryState::InvalidBinary.consume(character),
                BinaryState::InvalidBinary
            );
        }
        assert!(BinaryState::InvalidBinary.is_sink());
    }

    #[test]
    fn accepts_numbers_starting_and_ending_with_one() {
        for text in ["1", "11", "101", "1001", "111", "10101", "1000000001"] {
            assert!(classify::<BinaryState>(text), "should accept {text:?}");
        }
    }

    #[test]
    fn rejects_other_strings() {
        for text in ["", "0", "10", "01", "1a0", "1010", "100", "1 1", "12"] {
            assert!(!classify::<BinaryState>(text), "should reject {text:?}");
        }
    }
}
