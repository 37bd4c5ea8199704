//! Core automaton types and logic.
//!
//! This module contains the mechanism shared by every grammar:
//! - State definitions via the `State` and `Automaton` traits
//! - Classification as a fold over the input's characters
//! - Immutable per-character traces
//!
//! All logic here is pure apart from the `Detector`'s own state slot.

mod detector;
mod history;
mod macros;
mod state;

pub use detector::{classify, run, Detector};
pub use history::{Step, Trace};
pub use state::{Automaton, State};
