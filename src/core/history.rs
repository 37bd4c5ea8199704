//! Per-character transition history.
//!
//! A [`Trace`] records every step an automaton took while reading one input,
//! so a rejected string can be inspected after the fact. Classification
//! itself never needs a trace.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single character being consumed.
///
/// # Example
///
/// ```rust
/// use charstate::automata::IntegerState;
/// use charstate::core::Step;
///
/// let step = Step {
///     position: 0,
///     character: '7',
///     from: IntegerState::LookingForDigit,
///     to: IntegerState::Integer,
/// };
/// assert!(step.changed_state());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State> {
    /// Index of the character in the input, counted in `char`s
    pub position: usize,
    /// The character that was consumed
    pub character: char,
    /// The state before the character
    pub from: S,
    /// The state after the character
    pub to: S,
}

impl<S: State> Step<S> {
    /// Whether consuming the character moved the automaton to a different state.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of the steps taken over one input.
///
/// A trace always knows its starting state, so an empty input still has a
/// well-defined final state.
///
/// # Example
///
/// ```rust
/// use charstate::automata::BinaryState;
/// use charstate::core::{State, Step, Trace};
///
/// let trace = Trace::new(BinaryState::INITIAL)
///     .record(Step {
///         position: 0,
///         character: '1',
///         from: BinaryState::LookingForOneFirst,
///         to: BinaryState::ValidBinary,
///     })
///     .record(Step {
///         position: 1,
///         character: '0',
///         from: BinaryState::ValidBinary,
///         to: BinaryState::Incomplete,
///     });
///
/// assert_eq!(trace.get_path().len(), 3);
/// assert_eq!(trace.final_state(), BinaryState::Incomplete);
/// assert!(!trace.accepted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: State> {
    initial: S,
    steps: Vec<Step<S>>,
}

impl<S: State> Default for Trace<S> {
    fn default() -> Self {
        Self::new(S::INITIAL)
    }
}

impl<S: State> Trace<S> {
    /// Create an empty trace starting at `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Append a step, returning the extended trace.
    pub fn record(mut self, step: Step<S>) -> Self {
        self.steps.push(step);
        self
    }

    /// The state the trace started from.
    pub fn initial_state(&self) -> S {
        self.initial
    }

    /// The state reached after the last recorded step.
    pub fn final_state(&self) -> S {
        self.steps.last().map_or(self.initial, |step| step.to)
    }

    /// Whether the final state is accepting.
    pub fn accepted(&self) -> bool {
        self.final_state().is_accepting()
    }

    /// Get the path of states traversed: the initial state, then the `to`
    /// state of each step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use charstate::automata::IntegerState;
    /// use charstate::core::Trace;
    ///
    /// let trace: Trace<IntegerState> = Trace::default();
    /// assert_eq!(trace.get_path(), vec![&IntegerState::LookingForDigit]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Position of the character that first moved the automaton into a sink.
    ///
    /// Returns `None` if no sink was entered, or if the trace starts in one.
    pub fn sink_entered_at(&self) -> Option<usize> {
        self.steps
            .iter()
            .find(|step| step.to.is_sink() && !step.from.is_sink())
            .map(|step| step.position)
    }

    /// Get all steps in order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// Number of characters consumed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no character was consumed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
            Failed,
        }
        initial: Initial
        accepting: [Complete]
        sink: [Failed]
    }

    fn step(position: usize, character: char, from: TestState, to: TestState) -> Step<TestState> {
        Step {
            position,
            character,
            from,
            to,
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace: Trace<TestState> = Trace::default();
        assert!(trace.is_empty());
        assert_eq!(trace.len(), 0);
        assert_eq!(trace.get_path(), vec![&TestState::Initial]);
        assert_eq!(trace.final_state(), TestState::Initial);
        assert!(!trace.accepted());
    }

    #[test]
    fn record_adds_step() {
        let trace = Trace::new(TestState::Initial).record(step(
            0,
            'a',
            TestState::Initial,
            TestState::Processing,
        ));

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.final_state(), TestState::Processing);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let trace = Trace::new(TestState::Initial)
            .record(step(0, 'a', TestState::Initial, TestState::Processing))
            .record(step(1, 'b', TestState::Processing, TestState::Complete));

        let path = trace.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
        assert!(trace.accepted());
    }

    #[test]
    fn sink_entered_at_reports_first_entry() {
        let trace = Trace::new(TestState::Initial)
            .record(step(0, 'a', TestState::Initial, TestState::Processing))
            .record(step(1, '!', TestState::Processing, TestState::Failed))
            .record(step(2, 'b', TestState::Failed, TestState::Failed));

        assert_eq!(trace.sink_entered_at(), Some(1));
    }

    #[test]
    fn sink_entered_at_is_none_without_sink() {
        let trace = Trace::new(TestState::Initial).record(step(
            0,
            'a',
            TestState::Initial,
            TestState::Processing,
        ));

        assert_eq!(trace.sink_entered_at(), None);
    }

    #[test]
    fn changed_state_detects_self_loops() {
        assert!(step(0, 'a', TestState::Initial, TestState::Processing).changed_state());
        assert!(!step(0, 'a', TestState::Failed, TestState::Failed).changed_state());
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = Trace::new(TestState::Initial)
            .record(step(0, 'a', TestState::Initial, TestState::Processing));

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(trace, deserialized);
    }
}
