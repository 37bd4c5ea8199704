//! Character classes used by the transition functions.

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Decimal digits other than zero.
pub const DIGITS_NO_ZERO: &str = "123456789";

/// Uppercase ASCII letters.
pub const CAPITALS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters that count as "special" for the complex-password grammar.
///
/// `@` is a member. The email grammar does not consult this set.
pub const SPECIAL_CHARACTERS: &str = "!@#$%&*";

pub fn is_digit(character: char) -> bool {
    DIGITS.contains(character)
}

pub fn is_nonzero_digit(character: char) -> bool {
    DIGITS_NO_ZERO.contains(character)
}

pub fn is_capital(character: char) -> bool {
    CAPITALS.contains(character)
}

pub fn is_special(character: char) -> bool {
    SPECIAL_CHARACTERS.contains(character)
}
