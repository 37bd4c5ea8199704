//! The five grammar automata.
//!
//! Each automaton is a closed state enum plus one exhaustive transition
//! function. None of them carries data, so each is a process-wide constant.

mod binary;
mod email;
mod float;
mod integer;
mod password;

pub use binary::BinaryState;
pub use email::EmailState;
pub use float::FloatState;
pub use integer::IntegerState;
pub use password::PasswordState;
