//! Running an automaton over an input string.
//!
//! Two ways to classify are offered. [`classify`] is a pure left fold and is
//! safe to call from any number of threads. [`Detector`] keeps a current-state
//! slot that is reset at the start of every call; it takes `&mut self`, so the
//! borrow checker rules out interleaved calls on one instance.

use super::history::{Step, Trace};
use super::state::Automaton;
use tracing::{debug, trace};

/// Fold `text` through the automaton, returning the final state.
///
/// # Example
///
/// ```rust
/// use charstate::automata::BinaryState;
/// use charstate::core::run;
///
/// assert_eq!(run::<BinaryState>("10"), BinaryState::Incomplete);
/// ```
pub fn run<A: Automaton>(text: &str) -> A {
    text.chars().fold(A::INITIAL, A::consume)
}

/// Whether the automaton accepts the whole of `text`.
///
/// # Example
///
/// ```rust
/// use charstate::automata::FloatState;
/// use charstate::core::classify;
///
/// assert!(classify::<FloatState>("0.5"));
/// assert!(!classify::<FloatState>("1."));
/// ```
pub fn classify<A: Automaton>(text: &str) -> bool {
    let state = run::<A>(text);
    debug!(
        automaton = std::any::type_name::<A>(),
        state = state.name(),
        accepted = state.is_accepting(),
        "classified"
    );
    state.is_accepting()
}

/// Reusable detector owning the current state of one automaton.
///
/// Every call to [`Detector::classify`] resets the state first, so a previous
/// call never influences the next one.
///
/// # Example
///
/// ```rust
/// use charstate::automata::EmailState;
/// use charstate::core::Detector;
///
/// let mut detector = Detector::<EmailState>::new();
/// assert!(!detector.classify("invalid@@email.com"));
/// assert!(detector.classify("valid@email.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Detector<A: Automaton> {
    current: A,
}

impl<A: Automaton> Default for Detector<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Automaton> Detector<A> {
    /// Create a detector positioned at the automaton's initial state.
    pub fn new() -> Self {
        Self { current: A::INITIAL }
    }

    /// The state left behind by the most recent call.
    pub fn current_state(&self) -> A {
        self.current
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.current = A::INITIAL;
    }

    /// Classify `text`, starting from a fresh initial state.
    pub fn classify(&mut self, text: &str) -> bool {
        self.reset();
        for character in text.chars() {
            self.current = self.current.consume(character);
        }
        debug!(
            automaton = std::any::type_name::<A>(),
            state = self.current.name(),
            accepted = self.current.is_accepting(),
            "classified"
        );
        self.current.is_accepting()
    }

    /// Classify `text` and keep every step taken.
    pub fn trace(&mut self, text: &str) -> Trace<A> {
        self.reset();
        let mut history = Trace::new(self.current);
        for (position, character) in text.chars().enumerate() {
            let from = self.current;
            self.current = from.consume(character);
            trace!(
                position,
                ?character,
                from = from.name(),
                to = self.current.name(),
                "consumed"
            );
            history = history.record(Step {
                position,
                character,
                from,
                to: self.current,
            });
        }
        debug!(
            automaton = std::any::type_name::<A>(),
            state = self.current.name(),
            accepted = self.current.is_accepting(),
            steps = history.len(),
            "traced"
        );
        history
    }
}
