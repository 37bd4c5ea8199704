//! Charstate: character-driven finite automata for lexical classification
//!
//! Every classifier answers one question: does this whole string, read left
//! to right one character at a time, belong to the grammar? Each grammar is a
//! deterministic automaton whose transition function is total, so every
//! input ends in some state and classification can never fail.
//!
//! # Core Concepts
//!
//! - **State**: a fieldless enum implementing [`core::State`], usually declared
//!   with [`state_enum!`]
//! - **Automaton**: a state type with a total `consume(char) -> Self`
//! - **Classification**: a left fold of `consume` from the initial state;
//!   the input is accepted if the final state is accepting
//! - **Trace**: the optional per-character record of a classification
//!
//! # Example
//!
//! ```rust
//! use charstate::{is_binary, is_complex_password, is_email, is_float, is_integer};
//!
//! assert!(is_binary("101"));
//! assert!(!is_binary("10"));
//! assert!(is_integer("7654321"));
//! assert!(!is_integer("01"));
//! assert!(is_float("0.5"));
//! assert!(!is_float("01.5"));
//! assert!(is_email("a@b.c"));
//! assert!(!is_email("a@b.b.c"));
//! assert!(is_complex_password("aaaaH!aa"));
//! assert!(!is_complex_password("Password123@"));
//! ```

pub mod alphabet;
pub mod automata;
pub mod core;
pub mod error;
pub mod grammar;

// Re-export commonly used types
pub use automata::{BinaryState, EmailState, FloatState, IntegerState, PasswordState};
pub use crate::core::{Automaton, Detector, State, Step, Trace};
pub use error::{GrammarError, GrammarResult};
pub use grammar::{Grammar, GrammarTrace, NamedStep};

/// Binary numeral that starts and ends with `1`.
pub fn is_binary(text: &str) -> bool {
    core::classify::<BinaryState>(text)
}

/// Non-empty digit string without a leading zero.
pub fn is_integer(text: &str) -> bool {
    core::classify::<IntegerState>(text)
}

/// `0.d+` or `[1-9]d*.d+`.
pub fn is_float(text: &str) -> bool {
    core::classify::<FloatState>(text)
}

/// Simplified `local@domain.suffix` address.
pub fn is_email(text: &str) -> bool {
    core::classify::<EmailState>(text)
}

/// Password with a capital and a special character, not ending on a special character.
pub fn is_complex_password(text: &str) -> bool {
    core::classify::<PasswordState>(text)
}
